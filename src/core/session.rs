use crate::config::profile::ConnectionProfile;
use crate::utils::error::{Result, ZosmfError};

/// Token type issued by the API Mediation Layer gateway.
pub const TOKEN_TYPE_APIML: &str = "apimlAuthenticationToken";

/// How a session authenticates its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// Token-based: APIML tokens travel as a cookie, anything else as a
    /// bearer header.
    Token {
        token_type: String,
        token_value: String,
    },
    /// HTTP basic auth.
    Basic { user: String, password: String },
}

/// Transport and auth context for one z/OSMF host, derived from a
/// [`ConnectionProfile`].
#[derive(Debug, Clone)]
pub struct Session {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub base_path: Option<String>,
    pub reject_unauthorized: bool,
    pub auth: AuthScheme,
}

impl Session {
    /// Build a session from profile fields. Token fields win over the
    /// user/password pair when both are present; a profile with neither is
    /// rejected here rather than failing on first use.
    pub fn from_profile(profile: &ConnectionProfile) -> Result<Self> {
        if profile.host.trim().is_empty() {
            return Err(ZosmfError::AuthError {
                message: "profile has no host".to_string(),
            });
        }

        let auth = if profile.has_token() {
            AuthScheme::Token {
                token_type: profile
                    .token_type
                    .clone()
                    .unwrap_or_else(|| TOKEN_TYPE_APIML.to_string()),
                token_value: profile.token_value.clone().unwrap_or_default(),
            }
        } else {
            match (profile.user.as_deref(), profile.password.as_deref()) {
                (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => {
                    AuthScheme::Basic {
                        user: user.to_string(),
                        password: password.to_string(),
                    }
                }
                _ => {
                    return Err(ZosmfError::AuthError {
                        message: "profile has neither a token nor a user/password pair"
                            .to_string(),
                    })
                }
            }
        };

        Ok(Self {
            host: profile.host.clone(),
            port: profile.port,
            protocol: profile.protocol.clone(),
            base_path: profile.base_path.clone(),
            reject_unauthorized: profile.reject_unauthorized,
            auth,
        })
    }

    /// Origin plus optional base path, without a trailing slash.
    pub fn base_url(&self) -> String {
        let mut url = format!("{}://{}:{}", self.protocol, self.host, self.port);
        if let Some(base_path) = &self.base_path {
            let trimmed = base_path.trim_matches('/');
            if !trimmed.is_empty() {
                url.push('/');
                url.push_str(trimmed);
            }
        }
        url
    }
}
