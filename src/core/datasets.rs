//! MVS dataset calls against `restfiles/ds`.

use crate::core::rest::{ZosmfRest, RESOURCE_FILES};
use crate::domain::model::{
    CopyDatasetOptions, CreateDatasetOptions, Dataset, DatasetType, DeleteDatasetOptions,
    DownloadOptions, FilesResponse, ListOptions, UploadOptions,
};
use crate::utils::error::Result;
use reqwest::Method;
use std::path::Path;

fn ds_resource(dataset_name: &str, volume: Option<&str>) -> String {
    match volume {
        Some(vol) => format!("{}/ds/-({})/{}", RESOURCE_FILES, vol, dataset_name),
        None => format!("{}/ds/{}", RESOURCE_FILES, dataset_name),
    }
}

fn member_resource(dataset_name: &str, member: Option<&str>) -> String {
    match member {
        Some(m) => format!("{}/ds/{}({})", RESOURCE_FILES, dataset_name, m),
        None => format!("{}/ds/{}", RESOURCE_FILES, dataset_name),
    }
}

fn apply_list_headers(
    mut req: reqwest::RequestBuilder,
    options: &ListOptions,
) -> reqwest::RequestBuilder {
    if let Some(attributes) = &options.attributes {
        req = req.header("X-IBM-Attributes", attributes);
    }
    if let Some(max_items) = options.max_items {
        req = req.header("X-IBM-Max-Items", max_items.to_string());
    }
    req
}

pub async fn list(rest: &ZosmfRest, filter: &str, options: &ListOptions) -> Result<FilesResponse> {
    let req = rest
        .request(Method::GET, &format!("{}/ds", RESOURCE_FILES))
        .query(&[("dslevel", filter)]);
    let body: serde_json::Value = rest.execute_json(apply_list_headers(req, options)).await?;
    Ok(FilesResponse::ok(body))
}

pub async fn members(
    rest: &ZosmfRest,
    dataset_name: &str,
    options: &ListOptions,
) -> Result<FilesResponse> {
    let req = rest.request(
        Method::GET,
        &format!("{}/ds/{}/member", RESOURCE_FILES, dataset_name),
    );
    let body: serde_json::Value = rest.execute_json(apply_list_headers(req, options)).await?;
    Ok(FilesResponse::ok(body))
}

pub async fn download(
    rest: &ZosmfRest,
    dataset_name: &str,
    options: &DownloadOptions,
) -> Result<FilesResponse> {
    let mut req = rest.request(
        Method::GET,
        &ds_resource(dataset_name, options.volume.as_deref()),
    );
    if options.binary {
        req = req.header("X-IBM-Data-Type", "binary");
    }

    let mut response = if options.binary {
        let (bytes, etag) = rest.execute_bytes(req).await?;
        if let Some(file) = &options.file {
            tokio::fs::write(file, &bytes).await?;
        }
        let mut resp = FilesResponse::ok(serde_json::Value::Null);
        resp.command_response = Some(format!("{} bytes transferred", bytes.len()));
        resp.etag = etag;
        resp
    } else {
        let (text, etag) = rest.execute_text(req).await?;
        if let Some(file) = &options.file {
            tokio::fs::write(file, &text).await?;
        }
        let mut resp = FilesResponse::ok(serde_json::Value::String(text));
        resp.etag = etag;
        resp
    };

    if !options.return_etag {
        response.etag = None;
    }
    Ok(response)
}

pub async fn upload(
    rest: &ZosmfRest,
    input_file_path: &Path,
    dataset_name: &str,
    options: &UploadOptions,
) -> Result<FilesResponse> {
    let contents = tokio::fs::read(input_file_path).await?;
    upload_buffer(rest, contents, dataset_name, options).await
}

pub async fn upload_buffer(
    rest: &ZosmfRest,
    contents: Vec<u8>,
    dataset_name: &str,
    options: &UploadOptions,
) -> Result<FilesResponse> {
    let mut req = rest.request(Method::PUT, &ds_resource(dataset_name, None));
    if options.binary {
        req = req
            .header("X-IBM-Data-Type", "binary")
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream");
    } else {
        req = req.header(reqwest::header::CONTENT_TYPE, "text/plain");
    }
    if let Some(etag) = &options.etag {
        req = req.header(reqwest::header::IF_MATCH, etag);
    }
    req = req.body(contents);

    let (_, etag) = rest.execute_text(req).await?;
    let mut resp = FilesResponse::ok(serde_json::Value::Null);
    if options.return_etag {
        resp.etag = etag;
    }
    Ok(resp)
}

/// Allocate a dataset. Caller attributes overlay the defaults carried by the
/// dataset type.
pub async fn create(
    rest: &ZosmfRest,
    dataset_type: DatasetType,
    dataset_name: &str,
    options: &CreateDatasetOptions,
) -> Result<FilesResponse> {
    let mut body = serde_json::to_value(dataset_type.default_options())?;
    let overlay = serde_json::to_value(options)?;
    if let (Some(base), Some(overlay)) = (body.as_object_mut(), overlay.as_object()) {
        for (key, value) in overlay {
            base.insert(key.clone(), value.clone());
        }
    }

    let req = rest
        .request(Method::POST, &ds_resource(dataset_name, None))
        .json(&body);
    let value = rest.execute_value(req).await?;
    Ok(FilesResponse::ok(value))
}

pub async fn create_like(
    rest: &ZosmfRest,
    dataset_name: &str,
    like_dataset_name: &str,
) -> Result<FilesResponse> {
    let req = rest
        .request(Method::POST, &ds_resource(dataset_name, None))
        .json(&serde_json::json!({"like": like_dataset_name}));
    let value = rest.execute_value(req).await?;
    Ok(FilesResponse::ok(value))
}

/// Copy into `to`; the source comes from `options.from_dataset`.
pub async fn copy(
    rest: &ZosmfRest,
    to: &Dataset,
    options: &CopyDatasetOptions,
) -> Result<FilesResponse> {
    let mut body = serde_json::to_value(options)?;
    if let Some(map) = body.as_object_mut() {
        map.insert(
            "request".to_string(),
            serde_json::Value::String("copy".to_string()),
        );
    }

    let req = rest
        .request(Method::PUT, &member_resource(&to.dsn, to.member.as_deref()))
        .json(&body);
    let value = rest.execute_value(req).await?;
    Ok(FilesResponse::ok(value))
}

pub async fn rename(
    rest: &ZosmfRest,
    current_dataset_name: &str,
    new_dataset_name: &str,
) -> Result<FilesResponse> {
    let req = rest
        .request(Method::PUT, &ds_resource(new_dataset_name, None))
        .json(&serde_json::json!({
            "request": "rename",
            "from-dataset": {"dsn": current_dataset_name}
        }));
    let value = rest.execute_value(req).await?;
    Ok(FilesResponse::ok(value))
}

pub async fn rename_member(
    rest: &ZosmfRest,
    dataset_name: &str,
    old_member_name: &str,
    new_member_name: &str,
) -> Result<FilesResponse> {
    let req = rest
        .request(
            Method::PUT,
            &member_resource(dataset_name, Some(new_member_name)),
        )
        .json(&serde_json::json!({
            "request": "rename",
            "from-dataset": {"dsn": dataset_name, "member": old_member_name}
        }));
    let value = rest.execute_value(req).await?;
    Ok(FilesResponse::ok(value))
}

pub async fn migrate(rest: &ZosmfRest, dataset_name: &str) -> Result<FilesResponse> {
    hsm_request(rest, dataset_name, "hmigrate").await
}

pub async fn recall(rest: &ZosmfRest, dataset_name: &str) -> Result<FilesResponse> {
    hsm_request(rest, dataset_name, "hrecall").await
}

async fn hsm_request(
    rest: &ZosmfRest,
    dataset_name: &str,
    request: &str,
) -> Result<FilesResponse> {
    let req = rest
        .request(Method::PUT, &ds_resource(dataset_name, None))
        .json(&serde_json::json!({"request": request}));
    let value = rest.execute_value(req).await?;
    Ok(FilesResponse::ok(value))
}

pub async fn delete(
    rest: &ZosmfRest,
    dataset_name: &str,
    options: &DeleteDatasetOptions,
) -> Result<FilesResponse> {
    let req = rest.request(
        Method::DELETE,
        &ds_resource(dataset_name, options.volume.as_deref()),
    );
    let value = rest.execute_value(req).await?;
    Ok(FilesResponse::ok(value))
}
