use anyhow::Result;
use httpmock::prelude::*;
use zosmf_bridge::domain::model::{
    CopyDatasetOptions, CreateDatasetOptions, Dataset, DatasetEntry, DatasetType,
    DeleteDatasetOptions, DownloadOptions, ListOptions, MemberEntry, UploadOptions,
};
use zosmf_bridge::{ConnectionProfile, MvsAdapter, MvsApi};

fn adapter_for(server: &MockServer) -> MvsAdapter {
    let toml = format!(
        "host = \"{}\"\nport = {}\nprotocol = \"http\"\nuser = \"ibmuser\"\npassword = \"secret\"\n",
        server.host(),
        server.port()
    );
    MvsAdapter::new(ConnectionProfile::from_toml_str(&toml).unwrap())
}

#[tokio::test]
async fn test_data_set_list_with_attributes() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/zosmf/restfiles/ds")
            .query_param("dslevel", "IBMUSER.*")
            .header("X-IBM-Attributes", "base");
        then.status(200).json_body(serde_json::json!({
            "items": [
                {"dsname": "IBMUSER.TEST.JCL", "dsorg": "PO", "recfm": "FB",
                 "lrecl": "80", "vol": "VOL001", "migr": "NO"},
                {"dsname": "IBMUSER.ARCHIVE", "migr": "YES"}
            ],
            "returnedRows": 2,
            "JSONversion": 1
        }));
    });

    let adapter = adapter_for(&server);
    let options = ListOptions {
        attributes: Some("base".to_string()),
        ..Default::default()
    };
    let response = adapter.data_set("IBMUSER.*", &options).await?;

    mock.assert();
    let entries: Vec<DatasetEntry> = response.items()?;
    assert_eq!(entries.len(), 2);
    assert!(!entries[0].is_migrated());
    assert!(entries[1].is_migrated());
    Ok(())
}

#[tokio::test]
async fn test_all_members() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/zosmf/restfiles/ds/IBMUSER.TEST.JCL/member");
        then.status(200).json_body(serde_json::json!({
            "items": [{"member": "IEFBR14"}, {"member": "ASMJOB", "vers": 1, "mod": 3}],
            "returnedRows": 2
        }));
    });

    let adapter = adapter_for(&server);
    let response = adapter
        .all_members("IBMUSER.TEST.JCL", &ListOptions::default())
        .await?;

    mock.assert();
    let members: Vec<MemberEntry> = response.items()?;
    assert_eq!(members[0].member, "IEFBR14");
    assert_eq!(members[1].modification, Some(3));
    Ok(())
}

#[tokio::test]
async fn test_get_and_put_contents() -> Result<()> {
    let server = MockServer::start();
    let get_mock = server.mock(|when, then| {
        when.method(GET).path("/zosmf/restfiles/ds/IBMUSER.SRC(HELLO)");
        then.status(200).body("       IDENTIFICATION DIVISION.\n");
    });
    let put_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/ds/IBMUSER.SRC(HELLO)")
            .body("       IDENTIFICATION DIVISION.\n");
        then.status(204);
    });

    let adapter = adapter_for(&server);
    let response = adapter
        .get_contents("IBMUSER.SRC(HELLO)", &DownloadOptions::default())
        .await?;
    assert_eq!(
        response.api_response,
        serde_json::Value::String("       IDENTIFICATION DIVISION.\n".to_string())
    );
    get_mock.assert();

    let temp = tempfile::NamedTempFile::new()?;
    std::fs::write(temp.path(), "       IDENTIFICATION DIVISION.\n")?;
    adapter
        .put_contents(temp.path(), "IBMUSER.SRC(HELLO)", &UploadOptions::default())
        .await?;
    put_mock.assert();
    Ok(())
}

/// Type defaults fill whatever the caller leaves unset; caller fields win.
#[tokio::test]
async fn test_create_data_set_merges_type_defaults() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/zosmf/restfiles/ds/IBMUSER.NEW.PDS")
            .json_body_partial(
                r#"{"dsorg": "PO", "alcunit": "CYL", "dirblk": 5, "lrecl": 121, "recfm": "FBA"}"#,
            );
        then.status(201);
    });

    let adapter = adapter_for(&server);
    let options = CreateDatasetOptions {
        lrecl: Some(121),
        recfm: Some("FBA".to_string()),
        ..Default::default()
    };
    adapter
        .create_data_set(DatasetType::Partitioned, "IBMUSER.NEW.PDS", &options)
        .await?;

    mock.assert();
    Ok(())
}

/// Creating a member is an empty upload against the member resource.
#[tokio::test]
async fn test_create_data_set_member() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/ds/IBMUSER.TEST.JCL(NEWMEM)")
            .body("");
        then.status(204);
    });

    let adapter = adapter_for(&server);
    adapter
        .create_data_set_member("IBMUSER.TEST.JCL(NEWMEM)", &UploadOptions::default())
        .await?;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_allocate_like() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/zosmf/restfiles/ds/IBMUSER.COPY")
            .json_body(serde_json::json!({"like": "IBMUSER.MODEL"}));
        then.status(201);
    });

    let adapter = adapter_for(&server);
    adapter.allocate_like_data_set("IBMUSER.COPY", "IBMUSER.MODEL").await?;

    mock.assert();
    Ok(())
}

/// Without options the source argument becomes the from-dataset body field.
#[tokio::test]
async fn test_copy_member_defaults_from_dataset() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/ds/IBMUSER.DST(MEM1)")
            .json_body(serde_json::json!({
                "request": "copy",
                "from-dataset": {"dsn": "IBMUSER.SRC", "member": "MEM1"}
            }));
        then.status(200);
    });

    let adapter = adapter_for(&server);
    let from = Dataset {
        dsn: "IBMUSER.SRC".to_string(),
        member: Some("MEM1".to_string()),
    };
    let to = Dataset {
        dsn: "IBMUSER.DST".to_string(),
        member: Some("MEM1".to_string()),
    };
    adapter.copy_data_set_member(&from, &to, None).await?;

    mock.assert();
    Ok(())
}

/// A caller-supplied from-dataset is forwarded untouched.
#[tokio::test]
async fn test_copy_member_keeps_explicit_from_dataset() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/ds/IBMUSER.DST(MEM1)")
            .json_body(serde_json::json!({
                "request": "copy",
                "from-dataset": {"dsn": "OTHER.SRC", "member": "ELSE"},
                "replace": true
            }));
        then.status(200);
    });

    let adapter = adapter_for(&server);
    let from = Dataset {
        dsn: "IBMUSER.SRC".to_string(),
        member: Some("MEM1".to_string()),
    };
    let to = Dataset {
        dsn: "IBMUSER.DST".to_string(),
        member: Some("MEM1".to_string()),
    };
    let options = CopyDatasetOptions {
        from_dataset: Some(Dataset {
            dsn: "OTHER.SRC".to_string(),
            member: Some("ELSE".to_string()),
        }),
        replace: Some(true),
        ..Default::default()
    };
    adapter.copy_data_set_member(&from, &to, Some(options)).await?;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_rename_data_set_and_member() -> Result<()> {
    let server = MockServer::start();
    let ds_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/ds/IBMUSER.AFTER")
            .json_body(serde_json::json!({
                "request": "rename",
                "from-dataset": {"dsn": "IBMUSER.BEFORE"}
            }));
        then.status(200);
    });
    let member_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/ds/IBMUSER.PDS(NEW)")
            .json_body(serde_json::json!({
                "request": "rename",
                "from-dataset": {"dsn": "IBMUSER.PDS", "member": "OLD"}
            }));
        then.status(200);
    });

    let adapter = adapter_for(&server);
    adapter.rename_data_set("IBMUSER.BEFORE", "IBMUSER.AFTER").await?;
    adapter.rename_data_set_member("IBMUSER.PDS", "OLD", "NEW").await?;

    ds_mock.assert();
    member_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_migrate_and_recall() -> Result<()> {
    let server = MockServer::start();
    let migrate_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/ds/IBMUSER.COLD")
            .json_body(serde_json::json!({"request": "hmigrate"}));
        then.status(200);
    });
    let recall_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/zosmf/restfiles/ds/IBMUSER.WARM")
            .json_body(serde_json::json!({"request": "hrecall"}));
        then.status(200);
    });

    let adapter = adapter_for(&server);
    adapter.h_migrate_data_set("IBMUSER.COLD").await?;
    adapter.h_recall_data_set("IBMUSER.WARM").await?;

    migrate_mock.assert();
    recall_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_delete_data_set_with_volume() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/zosmf/restfiles/ds/-(VOL001)/IBMUSER.GONE");
        then.status(204);
    });

    let adapter = adapter_for(&server);
    let options = DeleteDatasetOptions {
        volume: Some("VOL001".to_string()),
    };
    adapter.delete_data_set("IBMUSER.GONE", &options).await?;

    mock.assert();
    Ok(())
}
