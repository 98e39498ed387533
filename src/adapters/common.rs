use crate::config::profile::ConnectionProfile;
use crate::core::info;
use crate::core::rest::ZosmfRest;
use crate::core::session::{Session, TOKEN_TYPE_APIML};
use crate::domain::ports::CommonApi;
use crate::utils::error::{Result, ZosmfError};
use async_trait::async_trait;
use tokio::sync::OnceCell;

/// Session-acquisition helper shared by the four zosmf facades. The REST
/// client is built lazily from the profile on first use and reused for every
/// later call; concurrent first calls share one construction, and a failed
/// construction is reported to the caller instead of being cached.
#[derive(Debug)]
pub struct ZosmfCommon {
    profile: ConnectionProfile,
    rest: OnceCell<ZosmfRest>,
}

impl ZosmfCommon {
    pub fn new(profile: ConnectionProfile) -> Self {
        Self {
            profile,
            rest: OnceCell::new(),
        }
    }

    pub fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    pub fn profile_type_name() -> &'static str {
        "zosmf"
    }

    pub(crate) async fn rest(&self) -> Result<&ZosmfRest> {
        self.rest
            .get_or_try_init(|| async {
                let session = Session::from_profile(&self.profile)?;
                ZosmfRest::new(session)
            })
            .await
    }
}

/// Facades expose their shared helper through this; the [`CommonApi`]
/// surface comes with it via the blanket impl below.
pub trait HasCommon {
    fn common(&self) -> &ZosmfCommon;
}

#[async_trait]
impl<T: HasCommon + Send + Sync> CommonApi for T {
    fn profile_type_name(&self) -> &'static str {
        ZosmfCommon::profile_type_name()
    }

    fn token_type_name(&self) -> &'static str {
        TOKEN_TYPE_APIML
    }

    async fn status(&self, profile_type: &str) -> Result<String> {
        if profile_type != "zosmf" {
            return Ok("unverified".to_string());
        }

        // Probe with a fresh, un-memoized session so a stale cached client
        // cannot mask a dead connection.
        let session = Session::from_profile(self.common().profile())?;
        let rest = ZosmfRest::new(session)?;
        match info::info(&rest).await {
            Ok(_) => Ok("active".to_string()),
            Err(ZosmfError::ApiError(_)) | Err(ZosmfError::HttpError { .. }) => {
                Ok("inactive".to_string())
            }
            Err(other) => Err(other),
        }
    }

    async fn login(&self) -> Result<String> {
        info::apiml_login(self.common().rest().await?).await
    }

    async fn logout(&self) -> Result<()> {
        info::apiml_logout(self.common().rest().await?).await
    }
}
