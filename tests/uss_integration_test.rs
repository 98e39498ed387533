use anyhow::Result;
use httpmock::prelude::*;
use tempfile::TempDir;
use zosmf_bridge::domain::model::{DownloadOptions, UploadOptions, UssFileType, UssItem};
use zosmf_bridge::{ConnectionProfile, UssAdapter, UssApi};

fn adapter_for(server: &MockServer) -> UssAdapter {
    let toml = format!(
        "host = \"{}\"\nport = {}\nprotocol = \"http\"\nuser = \"ibmuser\"\npassword = \"secret\"\n",
        server.host(),
        server.port()
    );
    UssAdapter::new(ConnectionProfile::from_toml_str(&toml).unwrap())
}

#[tokio::test]
async fn test_file_list_returns_typed_items() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/zosmf/restfiles/fs")
            .query_param("path", "/u/ibmuser");
        then.status(200).json_body(serde_json::json!({
            "items": [
                {"name": ".", "mode": "drwxr-xr-x", "size": 8192, "uid": 7, "user": "IBMUSER"},
                {"name": "hello.c", "mode": "-rw-r--r--", "size": 287, "uid": 7, "user": "IBMUSER"}
            ],
            "returnedRows": 2,
            "totalRows": 2,
            "JSONversion": 1
        }));
    });

    let adapter = adapter_for(&server);
    let response = adapter.file_list("/u/ibmuser").await?;

    mock.assert();
    assert!(response.success);
    let items: Vec<UssItem> = response.items()?;
    assert_eq!(items.len(), 2);
    assert!(items[0].is_directory());
    assert_eq!(items[1].name, "hello.c");
    Ok(())
}

/// Deleting a path with a leading slash strips exactly one slash before the
/// call goes out; without one the path is forwarded untouched.
#[tokio::test]
async fn test_delete_strips_exactly_one_leading_slash() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/zosmf/restfiles/fs/u/ibmuser/old.txt");
        then.status(204);
    });

    let adapter = adapter_for(&server);
    adapter.delete("/u/ibmuser/old.txt", false).await?;
    adapter.delete("u/ibmuser/old.txt", false).await?;

    assert_eq!(mock.hits(), 2);
    Ok(())
}

#[tokio::test]
async fn test_delete_recursive_sets_option_header() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/zosmf/restfiles/fs/u/ibmuser/dir")
            .header("X-IBM-Option", "recursive");
        then.status(204);
    });

    let adapter = adapter_for(&server);
    adapter.delete("/u/ibmuser/dir", true).await?;

    mock.assert();
    Ok(())
}

/// Rename wraps whatever the host answers into a success envelope.
#[tokio::test]
async fn test_rename_returns_success_envelope() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/fs/u/ibmuser/new.txt")
            .json_body(serde_json::json!({"request": "move", "from": "/u/ibmuser/old.txt"}));
        then.status(200)
            .json_body(serde_json::json!({"anything": ["the", "host", "said"]}));
    });

    let adapter = adapter_for(&server);
    let response = adapter.rename("/u/ibmuser/old.txt", "/u/ibmuser/new.txt").await?;

    mock.assert();
    assert!(response.success);
    assert_eq!(response.command_response, None);
    assert_eq!(
        response.api_response,
        serde_json::json!({"anything": ["the", "host", "said"]})
    );
    Ok(())
}

#[tokio::test]
async fn test_rename_envelope_is_success_even_for_empty_body() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/zosmf/restfiles/fs/u/ibmuser/new.txt");
        then.status(200);
    });

    let adapter = adapter_for(&server);
    let response = adapter.rename("/u/ibmuser/old.txt", "/u/ibmuser/new.txt").await?;

    assert!(response.success);
    assert_eq!(response.api_response, serde_json::Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_get_contents_writes_local_file() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/zosmf/restfiles/fs/u/ibmuser/hello.c");
        then.status(200).body("int main(void) { return 0; }\n");
    });

    let temp_dir = TempDir::new()?;
    let local = temp_dir.path().join("hello.c");

    let adapter = adapter_for(&server);
    let options = DownloadOptions {
        file: Some(local.clone()),
        ..Default::default()
    };
    let response = adapter.get_contents("/u/ibmuser/hello.c", &options).await?;

    assert!(response.success);
    assert_eq!(
        std::fs::read_to_string(&local)?,
        "int main(void) { return 0; }\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_put_content_uploads_file_body() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/fs/u/ibmuser/notes.txt")
            .body("remember the milk\n");
        then.status(201);
    });

    let temp_dir = TempDir::new()?;
    let local = temp_dir.path().join("notes.txt");
    std::fs::write(&local, "remember the milk\n")?;

    let adapter = adapter_for(&server);
    adapter
        .put_content(&local, "/u/ibmuser/notes.txt", &UploadOptions::default())
        .await?;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_upload_directory_creates_dirs_and_uploads_files() -> Result<()> {
    let server = MockServer::start();
    let dir_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/zosmf/restfiles/fs/u/ibmuser/proj")
            .json_body(serde_json::json!({"type": "directory"}));
        then.status(201);
    });
    let file_mock = server.mock(|when, then| {
        when.method(PUT).path("/zosmf/restfiles/fs/u/ibmuser/proj/a.txt");
        then.status(201);
    });

    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("a.txt"), "alpha")?;

    let adapter = adapter_for(&server);
    let response = adapter
        .upload_directory(temp_dir.path(), "/u/ibmuser/proj", &UploadOptions::default())
        .await?;

    dir_mock.assert();
    file_mock.assert();
    assert_eq!(response.command_response.as_deref(), Some("1 files uploaded"));
    Ok(())
}

#[tokio::test]
async fn test_create_file_with_mode() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/zosmf/restfiles/fs/u/ibmuser/run.sh")
            .json_body(serde_json::json!({"type": "file", "mode": "rwxr-xr-x"}));
        then.status(201);
    });

    let adapter = adapter_for(&server);
    adapter
        .create("/u/ibmuser/run.sh", UssFileType::File, Some("rwxr-xr-x"))
        .await?;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_file_tag_detects_binary() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/fs/u/ibmuser/data.bin")
            .json_body(serde_json::json!({"request": "chtag", "action": "list"}));
        then.status(200).json_body(serde_json::json!({
            "stdout": ["b binary\tT=off\t/u/ibmuser/data.bin"]
        }));
    });

    let adapter = adapter_for(&server);
    assert!(adapter.is_file_tag_bin_or_ascii("/u/ibmuser/data.bin").await?);
    Ok(())
}

#[tokio::test]
async fn test_file_tag_ebcdic_text_is_not_bin_or_ascii() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/zosmf/restfiles/fs/u/ibmuser/prog.c");
        then.status(200).json_body(serde_json::json!({
            "stdout": ["t IBM-1047\tT=on\t/u/ibmuser/prog.c"]
        }));
    });

    let adapter = adapter_for(&server);
    assert!(!adapter.is_file_tag_bin_or_ascii("/u/ibmuser/prog.c").await?);
    Ok(())
}
