use std::fmt::{Display, Formatter};

#[macro_export]
macro_rules! twitch_request {
    ($type: ident, $url: literal) => {
        paste::paste! {
            $crate::api::TwitchRequest::<String>::new(reqwest::Method::[<$type:upper>], format!($url))
        }
    };
    ($type: ident, $url: expr) => {
        paste::paste! {
            $crate::api::TwitchRequest::<String>::new(reqwest::Method::[<$type:upper>], $url)
        }
    };
    ($type: ident, $url: literal, $($param: expr),*) => {
        paste::paste! {
            $crate::api::TwitchRequest::<String>::new(reqwest::Method::[<$type:upper>], format!($url, $($param,)*))
        }
    }
}

#[macro_export]
macro_rules! twitch_request_get {
    ($($rest: tt)*) => {
        $crate::twitch_request!(get, $($rest)*)
    }
}

pub use crate::twitch_request_get as get;

/// Video categories the `videos` endpoint can filter on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VideoType {
    All,
    Archive,
    Highlight,
    Upload,
}

impl Display for VideoType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoType::All => write!(f, "all"),
            VideoType::Archive => write!(f, "archive"),
            VideoType::Highlight => write!(f, "highlight"),
            VideoType::Upload => write!(f, "upload"),
        }
    }
}

/// Orderings the `videos` endpoint can apply.
///
/// `Trending` ranks by relevance within the requested period, not by date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VideoSort {
    Time,
    Trending,
    Views,
}

impl Display for VideoSort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoSort::Time => write!(f, "time"),
            VideoSort::Trending => write!(f, "trending"),
            VideoSort::Views => write!(f, "views"),
        }
    }
}

/// Lookback window for the `videos` endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VideoPeriod {
    All,
    Day,
    Week,
    Month,
}

impl Display for VideoPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoPeriod::All => write!(f, "all"),
            VideoPeriod::Day => write!(f, "day"),
            VideoPeriod::Week => write!(f, "week"),
            VideoPeriod::Month => write!(f, "month"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_render_as_helix_values() {
        assert_eq!(VideoType::Highlight.to_string(), "highlight");
        assert_eq!(VideoSort::Trending.to_string(), "trending");
        assert_eq!(VideoPeriod::Week.to_string(), "week");
    }
}
