//! Auth endpoint DTOs. Wire field names are camelCase.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 4, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// The (possibly expired) access token being replaced
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub token: String,
    /// Present only when refresh-chain renewal is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_request_uses_camel_case() {
        let request: RefreshRequest =
            serde_json::from_str(r#"{"token":"jwt","refreshToken":"opaque"}"#).unwrap();
        assert_eq!(request.token, "jwt");
        assert_eq!(request.refresh_token, "opaque");
    }

    #[test]
    fn refresh_response_omits_absent_refresh_token() {
        let response = RefreshResponse {
            token: "jwt".into(),
            refresh_token: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("refreshToken").is_none());
    }

    #[test]
    fn register_request_validates_email_and_lengths() {
        use validator::Validate;

        let valid = RegisterRequest {
            username: "alice".into(),
            email: "alice@x.com".into(),
            password: "Pw1!".into(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".into(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_name = RegisterRequest {
            username: "ab".into(),
            ..valid
        };
        assert!(short_name.validate().is_err());
    }
}
