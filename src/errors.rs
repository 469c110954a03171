use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// Non-success status from the auth or Helix endpoints. `body` is the raw
    /// response body, kept verbatim for diagnostics.
    Request { code: u16, body: String },
    /// The response body did not deserialize into the expected shape.
    Parse(String),
    /// Connection-level failure raised by the HTTP client.
    Transport(reqwest::Error),
    Custom(String),
}

impl Error {
    pub fn custom<S: Display>(message: S) -> Self {
        Self::Custom(message.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request { code, body } => write!(f, "request failed [{code}]: {body}"),
            Self::Parse(message) => write!(f, "malformed response: {message}"),
            Self::Transport(error) => write!(f, "transport failure: {error}"),
            Self::Custom(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error)
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
    fn from(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(error: serde_urlencoded::ser::Error) -> Self {
        Self::Custom(error.to_string())
    }
}
