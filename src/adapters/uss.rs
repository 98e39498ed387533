use crate::adapters::common::{HasCommon, ZosmfCommon};
use crate::config::profile::ConnectionProfile;
use crate::core::files;
use crate::domain::model::{DownloadOptions, FilesResponse, UploadOptions, UssFileType};
use crate::domain::ports::UssApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// USS facade over the zosmf file calls.
#[derive(Debug)]
pub struct UssAdapter {
    common: ZosmfCommon,
}

impl UssAdapter {
    pub fn new(profile: ConnectionProfile) -> Self {
        Self {
            common: ZosmfCommon::new(profile),
        }
    }
}

impl HasCommon for UssAdapter {
    fn common(&self) -> &ZosmfCommon {
        &self.common
    }
}

#[async_trait]
impl UssApi for UssAdapter {
    async fn file_list(&self, uss_path: &str) -> Result<FilesResponse> {
        files::list(self.common.rest().await?, uss_path).await
    }

    async fn is_file_tag_bin_or_ascii(&self, uss_path: &str) -> Result<bool> {
        files::is_tag_bin_or_ascii(self.common.rest().await?, uss_path).await
    }

    async fn get_contents(
        &self,
        uss_path: &str,
        options: &DownloadOptions,
    ) -> Result<FilesResponse> {
        files::download(self.common.rest().await?, uss_path, options).await
    }

    async fn put_content(
        &self,
        input_file_path: &Path,
        uss_path: &str,
        options: &UploadOptions,
    ) -> Result<FilesResponse> {
        files::upload(self.common.rest().await?, input_file_path, uss_path, options).await
    }

    async fn upload_directory(
        &self,
        input_directory_path: &Path,
        uss_directory_path: &str,
        options: &UploadOptions,
    ) -> Result<FilesResponse> {
        files::upload_directory(
            self.common.rest().await?,
            input_directory_path,
            uss_directory_path,
            options,
        )
        .await
    }

    async fn create(
        &self,
        uss_path: &str,
        file_type: UssFileType,
        mode: Option<&str>,
    ) -> Result<FilesResponse> {
        files::create(self.common.rest().await?, uss_path, file_type, mode).await
    }

    async fn delete(&self, uss_path: &str, recursive: bool) -> Result<FilesResponse> {
        // the delete endpoint does not tolerate the doubled slash
        let fixed_name = uss_path.strip_prefix('/').unwrap_or(uss_path);
        files::delete(self.common.rest().await?, fixed_name, recursive).await
    }

    async fn rename(&self, current_uss_path: &str, new_uss_path: &str) -> Result<FilesResponse> {
        let result =
            files::rename(self.common.rest().await?, current_uss_path, new_uss_path).await?;
        Ok(FilesResponse {
            success: true,
            command_response: None,
            api_response: result,
            etag: None,
        })
    }
}
