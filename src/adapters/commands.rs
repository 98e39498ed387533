use crate::adapters::common::{HasCommon, ZosmfCommon};
use crate::config::profile::ConnectionProfile;
use crate::core::commands;
use crate::domain::model::{ConsoleResponse, TsoIssueResponse, TsoStartParams};
use crate::domain::ports::CommandApi;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Command facade over the zosmf TSO and console calls.
#[derive(Debug)]
pub struct CommandAdapter {
    common: ZosmfCommon,
}

impl CommandAdapter {
    pub fn new(profile: ConnectionProfile) -> Self {
        Self {
            common: ZosmfCommon::new(profile),
        }
    }
}

impl HasCommon for CommandAdapter {
    fn common(&self) -> &ZosmfCommon {
        &self.common
    }
}

#[async_trait]
impl CommandApi for CommandAdapter {
    async fn issue_tso_command(&self, command: &str, account: &str) -> Result<TsoIssueResponse> {
        let params = TsoStartParams {
            account: account.to_string(),
            ..Default::default()
        };
        commands::issue_tso(self.common.rest().await?, command, &params).await
    }

    async fn issue_tso_command_with_params(
        &self,
        command: &str,
        params: &TsoStartParams,
    ) -> Result<TsoIssueResponse> {
        commands::issue_tso(self.common.rest().await?, command, params).await
    }

    async fn issue_mvs_command(&self, command: &str) -> Result<ConsoleResponse> {
        commands::issue_console(self.common.rest().await?, command).await
    }
}
