use std::env;

use chrono::{DateTime, Duration, Local};
use serde::Deserialize;

use crate::{api::TwitchResponse, pares, Error};

/// Application credentials for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub(crate) id: String,
    pub(crate) secret: String,
}

impl Credentials {
    /// Create credentials from a client ID and a client secret
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            id: client_id.to_string(),
            secret: client_secret.to_string(),
        }
    }

    /// Create credentials from environment variables
    ///
    /// A local `.env` file is loaded into the environment first, when present.
    ///
    /// # Variables
    /// - `TWITCH_CLIENT_ID`: Client ID
    /// - `TWITCH_CLIENT_SECRET`: Client secret
    pub fn from_env() -> Option<Self> {
        dotenvy::dotenv().ok();

        Some(Self::new(
            &env::var("TWITCH_CLIENT_ID").ok()?,
            &env::var("TWITCH_CLIENT_SECRET").ok()?,
        ))
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Deserialize)]
struct AuthBody {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Twitch app access token
///
/// Opaque bearer string. `expires` is derived from `expires_in` when the token
/// is issued; nothing here refreshes the token when it lapses.
#[derive(Default, Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires: DateTime<Local>,
}

impl Token {
    pub fn access(&self) -> &str {
        &self.access_token
    }

    pub fn ttype(&self) -> &str {
        &self.token_type
    }

    pub fn is_expired(&self) -> bool {
        self.expires <= Local::now()
    }

    pub(crate) fn from_auth(response: TwitchResponse) -> Result<Self, Error> {
        let TwitchResponse { body, .. } = response;
        let body: AuthBody = pares!(&body)?;

        Ok(Self {
            access_token: body.access_token,
            token_type: body.token_type.unwrap_or_else(|| "bearer".to_string()),
            expires: Local::now() + Duration::seconds(body.expires_in.unwrap_or(0)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(body: &str) -> TwitchResponse {
        TwitchResponse {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    #[test]
    fn token_parses_auth_body() {
        let token = Token::from_auth(response(
            r#"{"access_token":"tok-123","expires_in":3600,"token_type":"bearer"}"#,
        ))
        .unwrap();

        assert_eq!(token.access(), "tok-123");
        assert_eq!(token.ttype(), "bearer");
        assert!(!token.is_expired());
    }

    #[test]
    fn token_without_expiry_counts_as_expired() {
        let token = Token::from_auth(response(r#"{"access_token":"tok-123"}"#)).unwrap();
        assert!(token.is_expired());
    }

    #[test]
    fn missing_access_token_is_a_parse_error() {
        let error = Token::from_auth(response(r#"{"token_type":"bearer"}"#)).unwrap_err();
        assert!(matches!(error, Error::Parse(_)));
    }
}
