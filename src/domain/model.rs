use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::error::{Result, ZosmfError};

/// Envelope returned by the file-side operations. `api_response` carries the
/// raw z/OSMF body; typed views are available through [`FilesResponse::items`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesResponse {
    pub success: bool,
    #[serde(default)]
    pub command_response: Option<String>,
    #[serde(default)]
    pub api_response: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl FilesResponse {
    pub fn ok(api_response: serde_json::Value) -> Self {
        Self {
            success: true,
            command_response: None,
            api_response,
            etag: None,
        }
    }

    /// Deserialize the `items` array of the underlying body.
    pub fn items<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let items = self
            .api_response
            .get("items")
            .cloned()
            .ok_or_else(|| ZosmfError::ResponseError {
                message: "response has no 'items' array".to_string(),
            })?;
        Ok(serde_json::from_value(items)?)
    }
}

/// One entry of a USS directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UssItem {
    pub name: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub uid: Option<i64>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub gid: Option<i64>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub mtime: Option<String>,
}

impl UssItem {
    pub fn is_directory(&self) -> bool {
        self.mode.as_deref().is_some_and(|m| m.starts_with('d'))
    }
}

/// One entry of a dataset listing (X-IBM-Attributes: base).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub dsname: String,
    #[serde(default)]
    pub dsorg: Option<String>,
    #[serde(default)]
    pub recfm: Option<String>,
    #[serde(default)]
    pub lrecl: Option<String>,
    #[serde(default)]
    pub blksz: Option<String>,
    #[serde(default)]
    pub vol: Option<String>,
    #[serde(default)]
    pub migr: Option<String>,
    #[serde(default)]
    pub cdate: Option<String>,
    #[serde(default)]
    pub rdate: Option<String>,
}

impl DatasetEntry {
    pub fn is_migrated(&self) -> bool {
        self.migr.as_deref() == Some("YES")
    }
}

/// One entry of a PDS member listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberEntry {
    pub member: String,
    #[serde(default)]
    pub vers: Option<i64>,
    #[serde(default, rename = "mod")]
    pub modification: Option<i64>,
    #[serde(default)]
    pub c4date: Option<String>,
    #[serde(default)]
    pub m4date: Option<String>,
    #[serde(default)]
    pub mtime: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

/// A JES job descriptor as returned by `restjobs/jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub jobid: String,
    pub jobname: String,
    pub owner: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
    #[serde(default)]
    pub subsystem: Option<String>,
    #[serde(default)]
    pub class: Option<serde_json::Value>,
    #[serde(default)]
    pub retcode: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "files-url")]
    pub files_url: Option<String>,
    #[serde(default, rename = "job-correlator")]
    pub job_correlator: Option<String>,
    #[serde(default)]
    pub phase: Option<i64>,
    #[serde(default, rename = "phase-name")]
    pub phase_name: Option<String>,
    #[serde(default, rename = "exec-submitted")]
    pub exec_submitted: Option<DateTime<Utc>>,
    #[serde(default, rename = "exec-started")]
    pub exec_started: Option<DateTime<Utc>>,
    #[serde(default, rename = "exec-ended")]
    pub exec_ended: Option<DateTime<Utc>>,
}

/// A spool file belonging to a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoolFile {
    pub id: i64,
    pub ddname: String,
    #[serde(default)]
    pub jobname: Option<String>,
    #[serde(default)]
    pub jobid: Option<String>,
    #[serde(default)]
    pub stepname: Option<String>,
    #[serde(default)]
    pub procstep: Option<String>,
    #[serde(default)]
    pub class: Option<serde_json::Value>,
    #[serde(default, rename = "records-url")]
    pub records_url: Option<String>,
    #[serde(default, rename = "byte-count")]
    pub byte_count: Option<i64>,
    #[serde(default, rename = "record-count")]
    pub record_count: Option<i64>,
}

/// Feedback returned when a job is purged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFeedback {
    pub jobid: String,
    pub jobname: String,
    #[serde(default, rename = "original-jobid")]
    pub original_jobid: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub member: Option<String>,
    #[serde(default)]
    pub sysname: Option<String>,
    #[serde(default, rename = "job-correlator")]
    pub job_correlator: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One element of the TSO servlet `tsoData` array. Exactly one of the fields
/// is populated per element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsoData {
    #[serde(default, rename = "TSO MESSAGE")]
    pub message: Option<TsoMessage>,
    #[serde(default, rename = "TSO PROMPT")]
    pub prompt: Option<TsoPrompt>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsoMessage {
    #[serde(default, rename = "VERSION")]
    pub version: Option<String>,
    #[serde(rename = "DATA")]
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsoPrompt {
    #[serde(default, rename = "VERSION")]
    pub version: Option<String>,
    #[serde(default, rename = "HIDDEN")]
    pub hidden: Option<String>,
}

/// Raw body of one TSO servlet exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsoServletResponse {
    #[serde(default, rename = "servletKey")]
    pub servlet_key: Option<String>,
    #[serde(default)]
    pub ver: Option<String>,
    #[serde(default, rename = "tsoData")]
    pub tso_data: Vec<TsoData>,
    #[serde(default)]
    pub reused: Option<bool>,
    #[serde(default)]
    pub timeout: Option<bool>,
    #[serde(default, rename = "msgData")]
    pub msg_data: Option<serde_json::Value>,
}

impl TsoServletResponse {
    pub fn message_lines(&self) -> impl Iterator<Item = &str> {
        self.tso_data
            .iter()
            .filter_map(|d| d.message.as_ref())
            .map(|m| m.data.as_str())
    }

    pub fn has_prompt(&self) -> bool {
        self.tso_data.iter().any(|d| d.prompt.is_some())
    }
}

/// Result of issuing a TSO command through the address-space servlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsoIssueResponse {
    pub success: bool,
    pub command_response: Option<String>,
    pub servlet_key: Option<String>,
    #[serde(default)]
    pub zosmf_responses: Vec<TsoServletResponse>,
}

/// Raw body of a console command response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleApiResponse {
    #[serde(default, rename = "cmd-response")]
    pub cmd_response: Option<String>,
    #[serde(default, rename = "cmd-response-key")]
    pub cmd_response_key: Option<String>,
    #[serde(default, rename = "cmd-response-url")]
    pub cmd_response_url: Option<String>,
    #[serde(default, rename = "cmd-response-uri")]
    pub cmd_response_uri: Option<String>,
    #[serde(default, rename = "sol-key-detected")]
    pub sol_key_detected: Option<bool>,
}

/// Result of issuing an MVS console command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleResponse {
    pub success: bool,
    pub command_response: String,
    pub zosmf_response: ConsoleApiResponse,
}

/// Body of `GET zosmf/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZosmfInfo {
    #[serde(default)]
    pub zosmf_version: Option<String>,
    #[serde(default)]
    pub zosmf_hostname: Option<String>,
    #[serde(default)]
    pub zosmf_port: Option<String>,
    #[serde(default)]
    pub zosmf_saf_realm: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub zos_version: Option<String>,
    #[serde(default)]
    pub plugins: Option<serde_json::Value>,
}

/// Dataset reference used by copy operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub dsn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Value for the X-IBM-Attributes header ("base" for full entries).
    pub attributes: Option<String>,
    /// Value for the X-IBM-Max-Items header.
    pub max_items: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Local file to write the contents to, in addition to returning them.
    pub file: Option<PathBuf>,
    pub binary: bool,
    pub encoding: Option<String>,
    pub return_etag: bool,
    pub volume: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub binary: bool,
    pub encoding: Option<String>,
    /// Etag the upload must match (optimistic locking).
    pub etag: Option<String>,
    pub return_etag: bool,
}

/// Allocation attributes for dataset creation, serialized into the
/// `POST restfiles/ds` body. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDatasetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsorg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcunit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirblk: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avgblk: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recfm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blksize: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lrecl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storclass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mgntclass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataclass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsntype: Option<String>,
}

/// Dataset flavors with their conventional default allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetType {
    Partitioned,
    Sequential,
    Classic,
    C,
    Binary,
    Blank,
}

impl DatasetType {
    /// Default allocation attributes applied when the caller leaves a field
    /// unset. `Blank` carries no defaults.
    pub fn default_options(self) -> CreateDatasetOptions {
        let base = |dsorg: &str, recfm: &str, blksize: u32, lrecl: u32, primary: u32| {
            CreateDatasetOptions {
                dsorg: Some(dsorg.to_string()),
                alcunit: Some("CYL".to_string()),
                primary: Some(primary),
                recfm: Some(recfm.to_string()),
                blksize: Some(blksize),
                lrecl: Some(lrecl),
                ..Default::default()
            }
        };
        match self {
            DatasetType::Partitioned => CreateDatasetOptions {
                dirblk: Some(5),
                ..base("PO", "FB", 6160, 80, 1)
            },
            DatasetType::Sequential => base("PS", "FB", 6160, 80, 1),
            DatasetType::Classic => CreateDatasetOptions {
                dirblk: Some(25),
                ..base("PO", "FB", 6160, 80, 1)
            },
            DatasetType::C => CreateDatasetOptions {
                dirblk: Some(25),
                ..base("PO", "VB", 32760, 260, 1)
            },
            DatasetType::Binary => CreateDatasetOptions {
                dirblk: Some(25),
                ..base("PO", "U", 27998, 27998, 10)
            },
            DatasetType::Blank => CreateDatasetOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyDatasetOptions {
    #[serde(rename = "from-dataset", skip_serializing_if = "Option::is_none")]
    pub from_dataset: Option<Dataset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteDatasetOptions {
    pub volume: Option<String>,
}

/// Where and how to write a job's complete spool output.
#[derive(Debug, Clone)]
pub struct SpoolDownloadOptions {
    pub jobname: String,
    pub jobid: String,
    pub out_dir: PathBuf,
    /// Skip the `<jobid>` directory level under `out_dir`.
    pub omit_jobid_directory: bool,
    pub extension: Option<String>,
}

/// Optional address-space start parameters for TSO commands.
#[derive(Debug, Clone, Default)]
pub struct TsoStartParams {
    pub account: String,
    pub logon_procedure: Option<String>,
    pub character_set: Option<String>,
    pub code_page: Option<String>,
    pub rows: Option<u32>,
    pub columns: Option<u32>,
    pub region_size: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UssFileType {
    File,
    Directory,
}

impl UssFileType {
    pub fn as_str(self) -> &'static str {
        match self {
            UssFileType::File => "file",
            UssFileType::Directory => "directory",
        }
    }
}
