pub mod auth;
pub mod flow;
mod helix;
pub mod request;
pub mod response;

use std::collections::HashMap;

pub use auth::Token;
pub use helix::HelixApi;

use request::{VideoPeriod, VideoSort, VideoType};
use reqwest::{
    header::{HeaderName, HeaderValue},
    Method, StatusCode,
};

use crate::Error;

pub(crate) static AUTH_BASE_URL: &str = "https://id.twitch.tv/oauth2";
pub(crate) static API_BASE_URL: &str = "https://api.twitch.tv/helix";

/// Wrapper to build and send Twitch requests using `reqwest`
pub(crate) struct TwitchRequest<B: Into<reqwest::Body>> {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<HeaderName, String>,
    pub params: HashMap<String, String>,
    pub body: Option<B>,
}

#[derive(Debug)]
pub(crate) struct TwitchResponse {
    #[allow(dead_code)]
    pub status: StatusCode,
    pub body: String,
}

impl TwitchResponse {
    /// Splits responses on the success/failure line: anything non-2xx becomes
    /// an [`Error::Request`] carrying the status and the raw body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Result<Self, Error> {
        let status = response.status();
        let body = response.text().await?;
        match status.is_success() {
            true => Ok(TwitchResponse { status, body }),
            _ => Err(Error::Request {
                code: status.as_u16(),
                body,
            }),
        }
    }
}

impl TwitchRequest<String> {
    pub fn new<S: AsRef<str>>(method: Method, url: S) -> Self {
        Self {
            method,
            url: url.as_ref().to_string(),
            headers: HashMap::new(),
            params: HashMap::new(),
            body: None,
        }
    }
}

macro_rules! impl_into_twitch_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoTwitchParam for $ty {
                fn into_twitch_param(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    }
}

macro_rules! impl_into_twitch_param_with_ref {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoTwitchParam for $ty {
                fn into_twitch_param(self) -> Option<String> {
                    Some(self.to_string())
                }
            }

            impl IntoTwitchParam for &$ty {
                fn into_twitch_param(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    }
}

pub trait IntoTwitchParam {
    fn into_twitch_param(self) -> Option<String>;
}

impl<T: IntoTwitchParam> IntoTwitchParam for Option<T> {
    fn into_twitch_param(self) -> Option<String> {
        self.and_then(|v| v.into_twitch_param())
    }
}

impl_into_twitch_param!(i64, u64, usize, bool, &str);
impl_into_twitch_param_with_ref!(String, VideoType, VideoSort, VideoPeriod);

impl<B: Into<reqwest::Body>> TwitchRequest<B> {
    pub fn header<V: AsRef<str>>(mut self, key: HeaderName, value: V) -> Self {
        self.headers.insert(key, value.as_ref().to_string());
        self
    }

    pub fn param<K: AsRef<str>, V: IntoTwitchParam>(mut self, key: K, value: V) -> Self {
        if let Some(value) = value.into_twitch_param() {
            self.params.insert(key.as_ref().to_string(), value);
        }
        self
    }

    pub async fn send(mut self, token: &Token) -> Result<TwitchResponse, Error> {
        let url = if !self.params.is_empty() {
            format!("{}?{}", self.url, serde_urlencoded::to_string(&self.params)?)
        } else {
            self.url
        };

        let mut request = match self.method {
            Method::GET => reqwest::Client::new().get(url),
            Method::POST => reqwest::Client::new().post(url),
            _ => unimplemented!(),
        }
        .headers(
            self.headers
                .drain()
                .map(|(k, v)| (k, v.parse::<HeaderValue>().unwrap()))
                .collect(),
        )
        .header("Authorization", format!("Bearer {}", token.access()));

        if let Some(body) = self.body {
            request = request.body(body);
        }

        TwitchResponse::from_response(request.send().await?).await
    }
}
