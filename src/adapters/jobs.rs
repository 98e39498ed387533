use crate::adapters::common::{HasCommon, ZosmfCommon};
use crate::config::profile::ConnectionProfile;
use crate::core::jobs;
use crate::domain::model::{Job, JobFeedback, SpoolDownloadOptions, SpoolFile};
use crate::domain::ports::JesApi;
use crate::utils::error::Result;
use async_trait::async_trait;

/// JES facade over the zosmf job calls.
#[derive(Debug)]
pub struct JesAdapter {
    common: ZosmfCommon,
}

impl JesAdapter {
    pub fn new(profile: ConnectionProfile) -> Self {
        Self {
            common: ZosmfCommon::new(profile),
        }
    }
}

impl HasCommon for JesAdapter {
    fn common(&self) -> &ZosmfCommon {
        &self.common
    }
}

#[async_trait]
impl JesApi for JesAdapter {
    async fn jobs_by_owner_and_prefix(&self, owner: &str, prefix: &str) -> Result<Vec<Job>> {
        jobs::list(self.common.rest().await?, owner, prefix).await
    }

    async fn job(&self, jobid: &str) -> Result<Job> {
        jobs::get_by_id(self.common.rest().await?, jobid).await
    }

    async fn spool_files(&self, jobname: &str, jobid: &str) -> Result<Vec<SpoolFile>> {
        jobs::spool_files(self.common.rest().await?, jobname, jobid).await
    }

    async fn download_spool_content(&self, options: &SpoolDownloadOptions) -> Result<()> {
        jobs::download_all_spool(self.common.rest().await?, options).await
    }

    async fn spool_content_by_id(
        &self,
        jobname: &str,
        jobid: &str,
        spool_id: i64,
    ) -> Result<String> {
        jobs::spool_content_by_id(self.common.rest().await?, jobname, jobid, spool_id).await
    }

    async fn jcl_for_job(&self, job: &Job) -> Result<String> {
        jobs::jcl(self.common.rest().await?, &job.jobname, &job.jobid).await
    }

    async fn submit_jcl(
        &self,
        jcl: &str,
        internal_reader_recfm: Option<&str>,
        internal_reader_lrecl: Option<&str>,
    ) -> Result<Job> {
        jobs::submit_jcl(
            self.common.rest().await?,
            jcl,
            internal_reader_recfm,
            internal_reader_lrecl,
        )
        .await
    }

    async fn submit_job(&self, job_dataset: &str) -> Result<Job> {
        jobs::submit_from_dataset(self.common.rest().await?, job_dataset).await
    }

    async fn delete_job(&self, jobname: &str, jobid: &str) -> Result<()> {
        jobs::purge(self.common.rest().await?, jobname, jobid).await?;
        Ok(())
    }

    async fn delete_job_with_info(&self, jobname: &str, jobid: &str) -> Result<JobFeedback> {
        jobs::purge(self.common.rest().await?, jobname, jobid).await
    }
}
