//! JES job calls against `restjobs/jobs`.

use crate::core::rest::{ZosmfRest, RESOURCE_JOBS};
use crate::domain::model::{Job, JobFeedback, SpoolDownloadOptions, SpoolFile};
use crate::utils::error::{Result, ZosmfError};
use reqwest::Method;

pub async fn list(rest: &ZosmfRest, owner: &str, prefix: &str) -> Result<Vec<Job>> {
    let req = rest
        .request(Method::GET, RESOURCE_JOBS)
        .query(&[("owner", owner), ("prefix", prefix)]);
    rest.execute_json(req).await
}

/// Look a job up by id across all owners. The jobid is unique per JES, so
/// anything other than exactly one match is an error.
pub async fn get_by_id(rest: &ZosmfRest, jobid: &str) -> Result<Job> {
    let req = rest
        .request(Method::GET, RESOURCE_JOBS)
        .query(&[("owner", "*"), ("jobid", jobid)]);
    let mut jobs: Vec<Job> = rest.execute_json(req).await?;
    match jobs.len() {
        1 => Ok(jobs.remove(0)),
        n => Err(ZosmfError::ResponseError {
            message: format!("expected 1 job for id {}, host returned {}", jobid, n),
        }),
    }
}

pub async fn spool_files(rest: &ZosmfRest, jobname: &str, jobid: &str) -> Result<Vec<SpoolFile>> {
    let req = rest.request(
        Method::GET,
        &format!("{}/{}/{}/files", RESOURCE_JOBS, jobname, jobid),
    );
    rest.execute_json(req).await
}

pub async fn spool_content_by_id(
    rest: &ZosmfRest,
    jobname: &str,
    jobid: &str,
    spool_id: i64,
) -> Result<String> {
    let req = rest.request(
        Method::GET,
        &format!(
            "{}/{}/{}/files/{}/records",
            RESOURCE_JOBS, jobname, jobid, spool_id
        ),
    );
    let (text, _) = rest.execute_text(req).await?;
    Ok(text)
}

pub async fn jcl(rest: &ZosmfRest, jobname: &str, jobid: &str) -> Result<String> {
    let req = rest.request(
        Method::GET,
        &format!("{}/{}/{}/files/JCL/records", RESOURCE_JOBS, jobname, jobid),
    );
    let (text, _) = rest.execute_text(req).await?;
    Ok(text)
}

pub async fn submit_jcl(
    rest: &ZosmfRest,
    jcl: &str,
    internal_reader_recfm: Option<&str>,
    internal_reader_lrecl: Option<&str>,
) -> Result<Job> {
    let mut req = rest
        .request(Method::PUT, RESOURCE_JOBS)
        .header(reqwest::header::CONTENT_TYPE, "text/plain");
    if let Some(recfm) = internal_reader_recfm {
        req = req.header("X-IBM-Intrdr-Recfm", recfm);
    }
    if let Some(lrecl) = internal_reader_lrecl {
        req = req.header("X-IBM-Intrdr-Lrecl", lrecl);
    }
    req = req.body(jcl.to_string());
    rest.execute_json(req).await
}

pub async fn submit_from_dataset(rest: &ZosmfRest, job_dataset: &str) -> Result<Job> {
    let file = if job_dataset.starts_with("//") {
        job_dataset.to_string()
    } else {
        format!("//'{}'", job_dataset)
    };
    let req = rest
        .request(Method::PUT, RESOURCE_JOBS)
        .json(&serde_json::json!({"file": file}));
    rest.execute_json(req).await
}

/// Purge a job synchronously (modify version 2.0) and return the feedback
/// body.
pub async fn purge(rest: &ZosmfRest, jobname: &str, jobid: &str) -> Result<JobFeedback> {
    let req = rest
        .request(
            Method::DELETE,
            &format!("{}/{}/{}", RESOURCE_JOBS, jobname, jobid),
        )
        .header("X-IBM-Job-Modify-Version", "2.0");
    rest.execute_json(req).await
}

/// Fetch every spool file of a job and write each one under
/// `out_dir[/jobid]/<ddname><extension>`.
pub async fn download_all_spool(
    rest: &ZosmfRest,
    options: &SpoolDownloadOptions,
) -> Result<()> {
    let files = spool_files(rest, &options.jobname, &options.jobid).await?;

    let mut dir = options.out_dir.clone();
    if !options.omit_jobid_directory {
        dir.push(&options.jobid);
    }
    tokio::fs::create_dir_all(&dir).await?;

    let extension = options.extension.as_deref().unwrap_or(".txt");
    for file in files {
        let content =
            spool_content_by_id(rest, &options.jobname, &options.jobid, file.id).await?;
        let target = dir.join(format!("{}{}", file.ddname, extension));
        tracing::debug!("writing spool file {} to {}", file.ddname, target.display());
        tokio::fs::write(target, content).await?;
    }
    Ok(())
}
