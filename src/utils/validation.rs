use crate::utils::error::{Result, ZosmfError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ZosmfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ZosmfError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ZosmfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    if host.trim().is_empty() {
        return Err(ZosmfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Host cannot be empty".to_string(),
        });
    }
    if host.contains("://") || host.contains('/') {
        return Err(ZosmfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Host must be a bare hostname or address, not a URL".to_string(),
        });
    }
    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(ZosmfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port cannot be 0".to_string(),
        });
    }
    Ok(())
}

fn valid_qualifier(q: &str) -> bool {
    if q.is_empty() || q.len() > 8 {
        return false;
    }
    let mut chars = q.chars();
    let first = chars.next().unwrap_or(' ');
    if !(first.is_ascii_alphabetic() || first == '#' || first == '$' || first == '@') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '#' || c == '$' || c == '@' || c == '-')
}

/// Validate an MVS dataset name: up to 44 characters, dot-separated
/// qualifiers of 1-8 characters each, first character of each qualifier
/// alphabetic or national (# $ @).
pub fn validate_dataset_name(field_name: &str, dsn: &str) -> Result<()> {
    let upper = dsn.to_ascii_uppercase();
    if upper.is_empty() || upper.len() > 44 {
        return Err(ZosmfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: dsn.to_string(),
            reason: "Dataset name must be 1-44 characters".to_string(),
        });
    }
    for qualifier in upper.split('.') {
        if !valid_qualifier(qualifier) {
            return Err(ZosmfError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: dsn.to_string(),
                reason: format!("Invalid qualifier: '{}'", qualifier),
            });
        }
    }
    Ok(())
}

/// Validate a PDS member name: 1-8 characters, same character rules as a
/// dataset qualifier.
pub fn validate_member_name(field_name: &str, member: &str) -> Result<()> {
    if !valid_qualifier(&member.to_ascii_uppercase()) {
        return Err(ZosmfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: member.to_string(),
            reason: "Member name must be 1-8 characters, first alphabetic or national"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ZosmfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_host() {
        assert!(validate_host("host", "mainframe.example.com").is_ok());
        assert!(validate_host("host", "10.1.2.3").is_ok());
        assert!(validate_host("host", "").is_err());
        assert!(validate_host("host", "https://mainframe.example.com").is_err());
    }

    #[test]
    fn test_validate_dataset_name() {
        assert!(validate_dataset_name("dsn", "IBMUSER.TEST.JCL").is_ok());
        assert!(validate_dataset_name("dsn", "SYS1.PARMLIB").is_ok());
        assert!(validate_dataset_name("dsn", "#USER.$A@B").is_ok());
        assert!(validate_dataset_name("dsn", "").is_err());
        assert!(validate_dataset_name("dsn", "TOOLONGQUAL1.DATA").is_err());
        assert!(validate_dataset_name("dsn", "1STARTSWITHDIGIT").is_err());
        assert!(validate_dataset_name(
            "dsn",
            "A2345678.B2345678.C2345678.D2345678.E2345678.F"
        )
        .is_err());
    }

    #[test]
    fn test_validate_member_name() {
        assert!(validate_member_name("member", "COBOL01").is_ok());
        assert!(validate_member_name("member", "TOOLONGMEM").is_err());
        assert!(validate_member_name("member", "9BAD").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com").is_ok());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
        assert!(validate_url("endpoint", "").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("command", "D T").is_ok());
        assert!(validate_non_empty_string("command", "   ").is_err());
    }
}
