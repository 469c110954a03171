use crate::{
    api::{
        auth::{Credentials, Token},
        TwitchResponse, API_BASE_URL, AUTH_BASE_URL,
    },
    Error, Locked, Shared,
};

/// Endpoint configuration.
///
/// Defaults target the public Twitch endpoints. Tests point both bases at a
/// local mock server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the OAuth2 authorization server
    pub auth_base_url: String,
    /// Base URL for the Helix API
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_base_url: AUTH_BASE_URL.to_string(),
            api_base_url: API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn auth_url(&self) -> &str {
        &self.auth_base_url
    }

    pub fn api_url(&self) -> &str {
        &self.api_base_url
    }
}

/// OAuth2 client-credentials flow.
///
/// Exchanges an application id/secret pair for an app access token. No user
/// authorization is involved and the token is never cached or refreshed.
#[derive(Debug, Clone)]
pub struct Creds {
    pub(crate) credentials: Credentials,
    pub(crate) config: Config,
    pub(crate) token: Shared<Locked<Token>>,
}

impl Creds {
    pub fn setup(credentials: Credentials, config: Config) -> Self {
        Self {
            credentials,
            config,
            token: Shared::new(Locked::new(Token::default())),
        }
    }

    /// Exchange the credential pair for an app access token.
    ///
    /// On success the token is stored on the flow and also returned to the
    /// caller. A rejected exchange leaves the stored token untouched.
    pub async fn request_access_token(&self) -> Result<Token, Error> {
        let body = serde_urlencoded::to_string([
            ("client_id", self.credentials.id.as_str()),
            ("client_secret", self.credentials.secret.as_str()),
            ("grant_type", "client_credentials"),
        ])?;

        let result = reqwest::Client::new()
            .post(format!("{}/token", self.config.auth_url()))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let token = Token::from_auth(TwitchResponse::from_response(result).await?)?;
        log::debug!("acquired app access token, expires {}", token.expires);

        *self.token.lock().unwrap() = token.clone();
        Ok(token)
    }

    pub fn token(&self) -> Token {
        self.token.lock().unwrap().clone()
    }

    pub fn set_token(&self, token: Token) {
        *self.token.lock().unwrap() = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_flow(server: &MockServer) -> Creds {
        Creds::setup(
            Credentials::new("test-client", "test-secret"),
            Config {
                auth_base_url: server.base_url(),
                api_base_url: server.base_url(),
            },
        )
    }

    #[tokio::test]
    async fn token_exchange_success() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/token")
                .body_includes("client_id=test-client")
                .body_includes("client_secret=test-secret")
                .body_includes("grant_type=client_credentials");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"access_token":"tok-123","expires_in":3600,"token_type":"bearer"}"#);
        });

        let twitch = test_flow(&server);
        let token = twitch.request_access_token().await.unwrap();

        assert!(!token.access().is_empty());
        assert_eq!(token.access(), "tok-123");
        assert_eq!(twitch.token().access(), "tok-123");
        mock.assert();
    }

    #[tokio::test]
    async fn rejected_credentials_surface_status_and_body() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(401)
                .header("content-type", "application/json")
                .body(r#"{"status":401,"message":"invalid client"}"#);
        });

        let twitch = test_flow(&server);
        let error = twitch.request_access_token().await.unwrap_err();

        match error {
            Error::Request { code, body } => {
                assert_eq!(code, 401);
                assert!(body.contains("invalid client"));
            }
            other => panic!("expected request error, got {other:?}"),
        }
        // the stored token is untouched by a failed exchange
        assert!(twitch.token().access().is_empty());
        mock.assert();
    }
}
