use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::session::Session;

pub const PASSWORD_PROVIDER_ID: &str = "password";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthUriRequest<'a> {
    pub provider_id: &'a str,
    pub continue_uri: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthUriResponse {
    pub auth_uri: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInWithIdpRequest<'a> {
    pub request_uri: &'a str,
    pub session_id: &'a str,
    pub return_secure_token: bool,
    pub return_idp_credential: bool,
}

/// Token bundle returned by every sign-in and sign-up call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    // absent when signInWithIdp reports a failure
    #[serde(default)]
    local_id: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    // the provider sends this as a decimal string
    #[serde(default)]
    expires_in: Option<String>,
    #[serde(default)]
    provider_id: Option<String>,
    // signInWithIdp reports some failures with a 200 status
    #[serde(default)]
    error_message: Option<String>,
}

impl TokenResponse {
    pub fn into_session(
        self,
        default_provider_id: &str,
    ) -> Result<Session, AuthError> {
        if let Some(message) = self.error_message {
            return Err(AuthError::Provider(message));
        }
        let local_id = self.local_id.ok_or_else(|| {
            AuthError::Provider("MISSING_LOCAL_ID".to_string())
        })?;
        let id_token = self.id_token.ok_or_else(|| {
            AuthError::Provider("MISSING_ID_TOKEN".to_string())
        })?;
        let expires_in = self
            .expires_in
            .as_deref()
            .map(str::parse::<u64>)
            .transpose()
            .map_err(|e| AuthError::Transport(format!("expiresIn: {}", e)))?
            .unwrap_or_default();
        Ok(Session::new(
            local_id,
            self.email,
            id_token,
            self.refresh_token.unwrap_or_default(),
            expires_in,
            self.provider_id
                .unwrap_or_else(|| default_provider_id.to_string()),
        ))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Text of a failed identity call, taken verbatim from the error body.
pub fn provider_error_message(status_code: u16, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(response) if !response.error.message.is_empty() => {
            response.error.message
        }
        _ => format!("HTTP {}", status_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_request_field_names() {
        let request = PasswordRequest {
            email: "ada@example.com",
            password: "secret",
            return_secure_token: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["returnSecureToken"], true);
    }

    #[test]
    fn test_token_response_into_session() {
        let body = r#"{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "uid-1",
            "email": "ada@example.com",
            "displayName": "",
            "idToken": "id-token",
            "registered": true,
            "refreshToken": "refresh-token",
            "expiresIn": "3600"
        }"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session(PASSWORD_PROVIDER_ID).unwrap();
        assert_eq!(session.user_id(), "uid-1");
        assert_eq!(session.email(), Some("ada@example.com"));
        assert_eq!(session.expires_in(), 3600);
        assert_eq!(session.provider_id(), "password");
    }

    #[test]
    fn test_idp_error_message_with_ok_status() {
        let body = r#"{
            "localId": "uid-1",
            "errorMessage": "FEDERATED_USER_ID_ALREADY_LINKED"
        }"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        let err = response.into_session("google.com").unwrap_err();
        assert_eq!(err.message(), "FEDERATED_USER_ID_ALREADY_LINKED");
    }

    #[test]
    fn test_idp_error_without_local_id() {
        let body = r#"{
            "errorMessage": "FEDERATED_USER_ID_ALREADY_LINKED",
            "providerId": "google.com"
        }"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        let err = response.into_session("google.com").unwrap_err();
        assert_eq!(
            err,
            AuthError::Provider("FEDERATED_USER_ID_ALREADY_LINKED".to_string())
        );
    }

    #[test]
    fn test_missing_local_id_without_error_message() {
        let body = r#"{"idToken": "id-token", "expiresIn": "3600"}"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        let err = response.into_session("google.com").unwrap_err();
        assert_eq!(err.message(), "MISSING_LOCAL_ID");
    }

    #[test]
    fn test_provider_error_message_is_verbatim() {
        let body = br#"{
            "error": {
                "code": 400,
                "message": "INVALID_LOGIN_CREDENTIALS",
                "errors": [{"message": "INVALID_LOGIN_CREDENTIALS",
                            "domain": "global", "reason": "invalid"}]
            }
        }"#;
        assert_eq!(
            provider_error_message(400, body),
            "INVALID_LOGIN_CREDENTIALS"
        );
    }

    #[test]
    fn test_provider_error_message_falls_back_to_status() {
        assert_eq!(provider_error_message(503, b"<html>down</html>"), "HTTP 503");
    }
}
