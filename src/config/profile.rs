use crate::utils::error::{Result, ZosmfError};
use crate::utils::validation::{validate_host, validate_port, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection fields for one z/OSMF host, as stored in a profile TOML file.
/// Either a token (`token_type` + `token_value`) or a `user`/`password` pair
/// must be present for authenticated calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionProfile {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default)]
    pub base_path: Option<String>,
    #[serde(default = "default_reject_unauthorized")]
    pub reject_unauthorized: bool,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub token_value: Option<String>,
}

fn default_protocol() -> String {
    "https".to_string()
}

fn default_reject_unauthorized() -> bool {
    true
}

impl ConnectionProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ZosmfError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ZosmfError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn has_token(&self) -> bool {
        self.token_value.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Replace `${VAR_NAME}` references with environment values; unknown
/// variables are left as-is.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl Validate for ConnectionProfile {
    fn validate(&self) -> Result<()> {
        validate_host("host", &self.host)?;
        validate_port("port", self.port)?;

        match self.protocol.as_str() {
            "http" | "https" => {}
            other => {
                return Err(ZosmfError::InvalidConfigValueError {
                    field: "protocol".to_string(),
                    value: other.to_string(),
                    reason: "Protocol must be http or https".to_string(),
                })
            }
        }

        if self.has_token() && self.token_type.as_deref().unwrap_or("").is_empty() {
            return Err(ZosmfError::MissingConfigError {
                field: "token_type".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_profile() {
        let toml_content = r#"
host = "mainframe.example.com"
port = 443
user = "ibmuser"
password = "secret"
"#;

        let profile = ConnectionProfile::from_toml_str(toml_content).unwrap();

        assert_eq!(profile.host, "mainframe.example.com");
        assert_eq!(profile.port, 443);
        assert_eq!(profile.protocol, "https");
        assert!(profile.reject_unauthorized);
        assert!(!profile.has_token());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ZOSMF_HOST", "lpar1.example.com");

        let toml_content = r#"
host = "${TEST_ZOSMF_HOST}"
port = 10443
token_type = "apimlAuthenticationToken"
token_value = "abc123"
"#;

        let profile = ConnectionProfile::from_toml_str(toml_content).unwrap();
        assert_eq!(profile.host, "lpar1.example.com");
        assert!(profile.has_token());

        std::env::remove_var("TEST_ZOSMF_HOST");
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let toml_content = r#"
host = "${DEFINITELY_NOT_SET_ANYWHERE_42}"
port = 443
"#;
        let profile = ConnectionProfile::from_toml_str(toml_content).unwrap();
        assert_eq!(profile.host, "${DEFINITELY_NOT_SET_ANYWHERE_42}");
    }

    #[test]
    fn test_profile_validation_rejects_bad_protocol() {
        let toml_content = r#"
host = "mainframe.example.com"
port = 443
protocol = "ftp"
"#;
        let profile = ConnectionProfile::from_toml_str(toml_content).unwrap();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_token_without_type_is_rejected() {
        let toml_content = r#"
host = "mainframe.example.com"
port = 443
token_value = "abc123"
"#;
        let profile = ConnectionProfile::from_toml_str(toml_content).unwrap();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_profile_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
host = "lpar2.example.com"
port = 8443
reject_unauthorized = false
user = "ibmuser"
password = "secret"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let profile = ConnectionProfile::from_file(temp_file.path()).unwrap();
        assert_eq!(profile.host, "lpar2.example.com");
        assert!(!profile.reject_unauthorized);
    }
}
