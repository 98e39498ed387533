//! z/OSMF info probe and APIML gateway authentication.

use crate::core::rest::{ZosmfRest, RESOURCE_INFO};
use crate::core::session::{AuthScheme, TOKEN_TYPE_APIML};
use crate::domain::model::ZosmfInfo;
use crate::utils::error::{Result, ZosmfError};
use reqwest::header::SET_COOKIE;
use reqwest::Method;

const APIML_LOGIN: &str = "gateway/api/v1/auth/login";
const APIML_LOGOUT: &str = "gateway/api/v1/auth/logout";

pub async fn info(rest: &ZosmfRest) -> Result<ZosmfInfo> {
    let req = rest.request(Method::GET, RESOURCE_INFO);
    rest.execute_json(req).await
}

/// Authenticate against the APIML gateway with the session's basic
/// credentials and return the token from the auth cookie.
pub async fn apiml_login(rest: &ZosmfRest) -> Result<String> {
    let (user, password) = match &rest.session().auth {
        AuthScheme::Basic { user, password } => (user.clone(), password.clone()),
        AuthScheme::Token { .. } => {
            return Err(ZosmfError::AuthError {
                message: "login requires a user/password pair, not a token".to_string(),
            })
        }
    };

    let req = rest
        .request(Method::POST, APIML_LOGIN)
        .json(&serde_json::json!({"username": user, "password": password}));
    let resp = rest.execute(req).await?;

    let prefix = format!("{}=", TOKEN_TYPE_APIML);
    for cookie in resp.headers().get_all(SET_COOKIE) {
        if let Ok(cookie) = cookie.to_str() {
            if let Some(rest_of) = cookie.strip_prefix(&prefix) {
                let token = rest_of.split(';').next().unwrap_or(rest_of);
                if !token.is_empty() {
                    return Ok(token.to_string());
                }
            }
        }
    }

    Err(ZosmfError::AuthError {
        message: "gateway login response carried no authentication cookie".to_string(),
    })
}

/// Invalidate the session's token at the gateway.
pub async fn apiml_logout(rest: &ZosmfRest) -> Result<()> {
    let req = rest.request(Method::POST, APIML_LOGOUT);
    rest.execute_empty(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::profile::ConnectionProfile;
    use crate::core::session::Session;
    use httpmock::prelude::*;

    fn rest_for(server: &MockServer, extra: &str) -> ZosmfRest {
        let toml = format!(
            "host = \"{}\"\nport = {}\nprotocol = \"http\"\n{}\n",
            server.host(),
            server.port(),
            extra
        );
        let profile = ConnectionProfile::from_toml_str(&toml).unwrap();
        ZosmfRest::new(Session::from_profile(&profile).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_login_extracts_token_from_cookie() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/gateway/api/v1/auth/login");
            then.status(204).header(
                "set-cookie",
                "apimlAuthenticationToken=tok-789; Path=/; Secure; HttpOnly",
            );
        });

        let rest = rest_for(&server, "user = \"ibmuser\"\npassword = \"secret\"");
        let token = apiml_login(&rest).await.unwrap();

        mock.assert();
        assert_eq!(token, "tok-789");
    }

    #[tokio::test]
    async fn test_login_with_token_session_is_rejected() {
        let server = MockServer::start();
        let rest = rest_for(
            &server,
            "token_type = \"apimlAuthenticationToken\"\ntoken_value = \"tok\"",
        );
        let err = apiml_login(&rest).await.unwrap_err();
        assert!(matches!(err, ZosmfError::AuthError { .. }));
    }

    #[tokio::test]
    async fn test_login_without_cookie_is_an_auth_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/gateway/api/v1/auth/login");
            then.status(204);
        });

        let rest = rest_for(&server, "user = \"ibmuser\"\npassword = \"secret\"");
        let err = apiml_login(&rest).await.unwrap_err();
        assert!(matches!(err, ZosmfError::AuthError { .. }));
    }
}
