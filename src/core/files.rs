//! USS file calls against `restfiles/fs`.

use crate::core::rest::{ZosmfRest, RESOURCE_FILES};
use crate::domain::model::{DownloadOptions, FilesResponse, UploadOptions, UssFileType};
use crate::utils::error::{Result, ZosmfError};
use reqwest::Method;
use std::path::Path;

/// Resource for a USS path; the path's own leading slash collapses into the
/// one after `fs`.
fn fs_resource(uss_path: &str) -> String {
    format!(
        "{}/fs/{}",
        RESOURCE_FILES,
        uss_path.strip_prefix('/').unwrap_or(uss_path)
    )
}

pub async fn list(rest: &ZosmfRest, uss_path: &str) -> Result<FilesResponse> {
    let req = rest
        .request(Method::GET, &format!("{}/fs", RESOURCE_FILES))
        .query(&[("path", uss_path)]);
    let body: serde_json::Value = rest.execute_json(req).await?;
    Ok(FilesResponse::ok(body))
}

/// Query the file tag via a chtag list request. True when the tag marks the
/// file as binary or as an ASCII-family codeset.
pub async fn is_tag_bin_or_ascii(rest: &ZosmfRest, uss_path: &str) -> Result<bool> {
    let req = rest
        .request(Method::PUT, &fs_resource(uss_path))
        .json(&serde_json::json!({"request": "chtag", "action": "list"}));
    let body: serde_json::Value = rest.execute_json(req).await?;
    let stdout = body
        .get("stdout")
        .and_then(|s| s.get(0))
        .and_then(|s| s.as_str())
        .ok_or_else(|| ZosmfError::ResponseError {
            message: "chtag list returned no stdout".to_string(),
        })?;
    Ok(stdout.contains("b ")
        || stdout.contains("UTF-")
        || stdout.contains("ISO8859-")
        || stdout.contains("IBM-850"))
}

pub async fn download(
    rest: &ZosmfRest,
    uss_path: &str,
    options: &DownloadOptions,
) -> Result<FilesResponse> {
    let mut req = rest.request(Method::GET, &fs_resource(uss_path));
    if options.binary {
        req = req.header("X-IBM-Data-Type", "binary");
    } else if let Some(encoding) = &options.encoding {
        req = req.header("X-IBM-Data-Type", format!("text;fileEncoding={}", encoding));
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
    uss_path: &str,
    options: &UploadOptions,
) -> Result<FilesResponse> {
    let contents = tokio::fs::read(input_file_path).await?;

    let mut req = rest.request(Method::PUT, &fs_resource(uss_path));
    if options.binary {
        req = req
            .header("X-IBM-Data-Type", "binary")
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream");
    } else {
        req = req.header(reqwest::header::CONTENT_TYPE, "text/plain");
        if let Some(encoding) = &options.encoding {
            req = req.header("X-IBM-Data-Type", format!("text;fileEncoding={}", encoding));
        }
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

/// Upload a local directory tree file by file, creating remote directories
/// as it descends.
pub async fn upload_directory(
    rest: &ZosmfRest,
    input_directory_path: &Path,
    uss_directory_path: &str,
    options: &UploadOptions,
) -> Result<FilesResponse> {
    let mut pending = vec![(
        input_directory_path.to_path_buf(),
        uss_directory_path.trim_end_matches('/').to_string(),
    )];
    let mut uploaded = 0usize;

    while let Some((local_dir, remote_dir)) = pending.pop() {
        create(rest, &remote_dir, UssFileType::Directory, None).await?;

        for entry in std::fs::read_dir(&local_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            let remote_path = format!("{}/{}", remote_dir, name);
            if entry.file_type()?.is_dir() {
                pending.push((entry.path(), remote_path));
            } else {
                upload(rest, &entry.path(), &remote_path, options).await?;
                uploaded += 1;
            }
        }
    }

    let mut resp = FilesResponse::ok(serde_json::Value::Null);
    resp.command_response = Some(format!("{} files uploaded", uploaded));
    Ok(resp)
}

pub async fn create(
    rest: &ZosmfRest,
    uss_path: &str,
    file_type: UssFileType,
    mode: Option<&str>,
) -> Result<FilesResponse> {
    let mut body = serde_json::json!({"type": file_type.as_str()});
    if let Some(mode) = mode {
        body["mode"] = serde_json::Value::String(mode.to_string());
    }
    let req = rest.request(Method::POST, &fs_resource(uss_path)).json(&body);
    let value = rest.execute_value(req).await?;
    Ok(FilesResponse::ok(value))
}

/// Delete the named file. The name is used verbatim in the URL, so callers
/// are expected to pass it without a leading slash.
pub async fn delete(rest: &ZosmfRest, name: &str, recursive: bool) -> Result<FilesResponse> {
    let mut req = rest.request(Method::DELETE, &format!("{}/fs/{}", RESOURCE_FILES, name));
    if recursive {
        req = req.header("X-IBM-Option", "recursive");
    }
    let value = rest.execute_value(req).await?;
    Ok(FilesResponse::ok(value))
}

/// Move a file or directory; returns the raw z/OSMF body.
pub async fn rename(
    rest: &ZosmfRest,
    current_uss_path: &str,
    new_uss_path: &str,
) -> Result<serde_json::Value> {
    let req = rest
        .request(Method::PUT, &fs_resource(new_uss_path))
        .json(&serde_json::json!({"request": "move", "from": current_uss_path}));
    rest.execute_value(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_resource_collapses_leading_slash() {
        assert_eq!(fs_resource("/u/ibmuser/a.txt"), "zosmf/restfiles/fs/u/ibmuser/a.txt");
        assert_eq!(fs_resource("u/ibmuser/a.txt"), "zosmf/restfiles/fs/u/ibmuser/a.txt");
    }
}
