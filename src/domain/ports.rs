use crate::domain::model::{
    ConsoleResponse, CopyDatasetOptions, CreateDatasetOptions, Dataset, DatasetType,
    DeleteDatasetOptions, DownloadOptions, FilesResponse, Job, JobFeedback, ListOptions,
    SpoolDownloadOptions, SpoolFile, TsoIssueResponse, TsoStartParams, UploadOptions, UssFileType,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Surface shared by every zosmf facade.
#[async_trait]
pub trait CommonApi: Send + Sync {
    fn profile_type_name(&self) -> &'static str;
    fn token_type_name(&self) -> &'static str;
    /// Probe the connection: "active" / "inactive", or "unverified" when the
    /// profile type is not zosmf.
    async fn status(&self, profile_type: &str) -> Result<String>;
    /// APIML gateway login; returns the token issued for the session.
    async fn login(&self) -> Result<String>;
    async fn logout(&self) -> Result<()>;
}

/// Unix System Services file operations.
#[async_trait]
pub trait UssApi: Send + Sync {
    async fn file_list(&self, uss_path: &str) -> Result<FilesResponse>;
    async fn is_file_tag_bin_or_ascii(&self, uss_path: &str) -> Result<bool>;
    async fn get_contents(&self, uss_path: &str, options: &DownloadOptions)
        -> Result<FilesResponse>;
    async fn put_content(
        &self,
        input_file_path: &Path,
        uss_path: &str,
        options: &UploadOptions,
    ) -> Result<FilesResponse>;
    async fn upload_directory(
        &self,
        input_directory_path: &Path,
        uss_directory_path: &str,
        options: &UploadOptions,
    ) -> Result<FilesResponse>;
    async fn create(
        &self,
        uss_path: &str,
        file_type: UssFileType,
        mode: Option<&str>,
    ) -> Result<FilesResponse>;
    async fn delete(&self, uss_path: &str, recursive: bool) -> Result<FilesResponse>;
    async fn rename(&self, current_uss_path: &str, new_uss_path: &str) -> Result<FilesResponse>;
}

/// MVS dataset operations.
#[async_trait]
pub trait MvsApi: Send + Sync {
    async fn data_set(&self, filter: &str, options: &ListOptions) -> Result<FilesResponse>;
    async fn all_members(&self, dataset_name: &str, options: &ListOptions)
        -> Result<FilesResponse>;
    async fn get_contents(
        &self,
        dataset_name: &str,
        options: &DownloadOptions,
    ) -> Result<FilesResponse>;
    async fn put_contents(
        &self,
        input_file_path: &Path,
        dataset_name: &str,
        options: &UploadOptions,
    ) -> Result<FilesResponse>;
    async fn create_data_set(
        &self,
        dataset_type: DatasetType,
        dataset_name: &str,
        options: &CreateDatasetOptions,
    ) -> Result<FilesResponse>;
    async fn create_data_set_member(
        &self,
        dataset_name: &str,
        options: &UploadOptions,
    ) -> Result<FilesResponse>;
    async fn allocate_like_data_set(
        &self,
        dataset_name: &str,
        like_dataset_name: &str,
    ) -> Result<FilesResponse>;
    async fn copy_data_set_member(
        &self,
        from: &Dataset,
        to: &Dataset,
        options: Option<CopyDatasetOptions>,
    ) -> Result<FilesResponse>;
    async fn rename_data_set(
        &self,
        current_dataset_name: &str,
        new_dataset_name: &str,
    ) -> Result<FilesResponse>;
    async fn rename_data_set_member(
        &self,
        dataset_name: &str,
        old_member_name: &str,
        new_member_name: &str,
    ) -> Result<FilesResponse>;
    async fn h_migrate_data_set(&self, dataset_name: &str) -> Result<FilesResponse>;
    async fn h_recall_data_set(&self, dataset_name: &str) -> Result<FilesResponse>;
    async fn delete_data_set(
        &self,
        dataset_name: &str,
        options: &DeleteDatasetOptions,
    ) -> Result<FilesResponse>;
}

/// JES job operations.
#[async_trait]
pub trait JesApi: Send + Sync {
    async fn jobs_by_owner_and_prefix(&self, owner: &str, prefix: &str) -> Result<Vec<Job>>;
    async fn job(&self, jobid: &str) -> Result<Job>;
    async fn spool_files(&self, jobname: &str, jobid: &str) -> Result<Vec<SpoolFile>>;
    async fn download_spool_content(&self, options: &SpoolDownloadOptions) -> Result<()>;
    async fn spool_content_by_id(
        &self,
        jobname: &str,
        jobid: &str,
        spool_id: i64,
    ) -> Result<String>;
    async fn jcl_for_job(&self, job: &Job) -> Result<String>;
    async fn submit_jcl(
        &self,
        jcl: &str,
        internal_reader_recfm: Option<&str>,
        internal_reader_lrecl: Option<&str>,
    ) -> Result<Job>;
    async fn submit_job(&self, job_dataset: &str) -> Result<Job>;
    async fn delete_job(&self, jobname: &str, jobid: &str) -> Result<()>;
    async fn delete_job_with_info(&self, jobname: &str, jobid: &str) -> Result<JobFeedback>;
}

/// TSO and MVS console commands.
#[async_trait]
pub trait CommandApi: Send + Sync {
    async fn issue_tso_command(&self, command: &str, account: &str) -> Result<TsoIssueResponse>;
    async fn issue_tso_command_with_params(
        &self,
        command: &str,
        params: &TsoStartParams,
    ) -> Result<TsoIssueResponse>;
    async fn issue_mvs_command(&self, command: &str) -> Result<ConsoleResponse>;
}
