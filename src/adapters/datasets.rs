use crate::adapters::common::{HasCommon, ZosmfCommon};
use crate::config::profile::ConnectionProfile;
use crate::core::datasets;
use crate::domain::model::{
    CopyDatasetOptions, CreateDatasetOptions, Dataset, DatasetType, DeleteDatasetOptions,
    DownloadOptions, FilesResponse, ListOptions, UploadOptions,
};
use crate::domain::ports::MvsApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// MVS dataset facade over the zosmf file calls.
#[derive(Debug)]
pub struct MvsAdapter {
    common: ZosmfCommon,
}

impl MvsAdapter {
    pub fn new(profile: ConnectionProfile) -> Self {
        Self {
            common: ZosmfCommon::new(profile),
        }
    }
}

impl HasCommon for MvsAdapter {
    fn common(&self) -> &ZosmfCommon {
        &self.common
    }
}

#[async_trait]
impl MvsApi for MvsAdapter {
    async fn data_set(&self, filter: &str, options: &ListOptions) -> Result<FilesResponse> {
        datasets::list(self.common.rest().await?, filter, options).await
    }

    async fn all_members(
        &self,
        dataset_name: &str,
        options: &ListOptions,
    ) -> Result<FilesResponse> {
        datasets::members(self.common.rest().await?, dataset_name, options).await
    }

    async fn get_contents(
        &self,
        dataset_name: &str,
        options: &DownloadOptions,
    ) -> Result<FilesResponse> {
        datasets::download(self.common.rest().await?, dataset_name, options).await
    }

    async fn put_contents(
        &self,
        input_file_path: &Path,
        dataset_name: &str,
        options: &UploadOptions,
    ) -> Result<FilesResponse> {
        datasets::upload(
            self.common.rest().await?,
            input_file_path,
            dataset_name,
            options,
        )
        .await
    }

    async fn create_data_set(
        &self,
        dataset_type: DatasetType,
        dataset_name: &str,
        options: &CreateDatasetOptions,
    ) -> Result<FilesResponse> {
        datasets::create(self.common.rest().await?, dataset_type, dataset_name, options).await
    }

    async fn create_data_set_member(
        &self,
        dataset_name: &str,
        options: &UploadOptions,
    ) -> Result<FilesResponse> {
        // an empty upload allocates the member
        datasets::upload_buffer(self.common.rest().await?, Vec::new(), dataset_name, options)
            .await
    }

    async fn allocate_like_data_set(
        &self,
        dataset_name: &str,
        like_dataset_name: &str,
    ) -> Result<FilesResponse> {
        datasets::create_like(self.common.rest().await?, dataset_name, like_dataset_name).await
    }

    async fn copy_data_set_member(
        &self,
        from: &Dataset,
        to: &Dataset,
        options: Option<CopyDatasetOptions>,
    ) -> Result<FilesResponse> {
        let new_options = match options {
            Some(options) if options.from_dataset.is_some() => options,
            Some(options) => CopyDatasetOptions {
                from_dataset: Some(from.clone()),
                ..options
            },
            None => CopyDatasetOptions {
                from_dataset: Some(from.clone()),
                ..Default::default()
            },
        };
        datasets::copy(self.common.rest().await?, to, &new_options).await
    }

    async fn rename_data_set(
        &self,
        current_dataset_name: &str,
        new_dataset_name: &str,
    ) -> Result<FilesResponse> {
        datasets::rename(
            self.common.rest().await?,
            current_dataset_name,
            new_dataset_name,
        )
        .await
    }

    async fn rename_data_set_member(
        &self,
        dataset_name: &str,
        old_member_name: &str,
        new_member_name: &str,
    ) -> Result<FilesResponse> {
        datasets::rename_member(
            self.common.rest().await?,
            dataset_name,
            old_member_name,
            new_member_name,
        )
        .await
    }

    async fn h_migrate_data_set(&self, dataset_name: &str) -> Result<FilesResponse> {
        datasets::migrate(self.common.rest().await?, dataset_name).await
    }

    async fn h_recall_data_set(&self, dataset_name: &str) -> Result<FilesResponse> {
        datasets::recall(self.common.rest().await?, dataset_name).await
    }

    async fn delete_data_set(
        &self,
        dataset_name: &str,
        options: &DeleteDatasetOptions,
    ) -> Result<FilesResponse> {
        datasets::delete(self.common.rest().await?, dataset_name, options).await
    }
}
