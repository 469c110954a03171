use std::fmt::{Display, Formatter};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};

#[macro_export]
macro_rules! pares {
    ($value: expr) => {
        {
            let jd = &mut serde_json::Deserializer::from_str($value);
            serde_path_to_error::deserialize(jd)
        }
    };
    ($type: ty: $value: expr) => {
        {
            let jd = &mut serde_json::Deserializer::from_str($value);
            serde_path_to_error::deserialize::<_, $type>(jd)
        }
    };
}

pub use crate::pares;

pub fn deserialize_rfc3339<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

/// The `{ "data": [...] }` envelope Helix wraps list responses in.
///
/// A missing `data` field reads as an empty list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Data<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

/// A Helix user record.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
    /// Platform-internal user id, distinct from the login name
    pub id: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub display_name: String,
}

/// A Helix video record, reduced to the fields this tool prints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Video {
    pub title: String,
    pub url: String,
    #[serde(deserialize_with = "deserialize_rfc3339")]
    pub created_at: DateTime<Utc>,
}

impl Display for Video {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, URL: {}, Date: {}",
            self.title,
            self.url,
            self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_renders_title_url_and_date() {
        let video: Video = pares!(
            r#"{"title":"Big Win","url":"https://twitch.tv/videos/1","created_at":"2024-01-01T00:00:00Z"}"#
        )
        .unwrap();

        assert_eq!(
            video.to_string(),
            "Title: Big Win, URL: https://twitch.tv/videos/1, Date: 2024-01-01T00:00:00Z"
        );
    }

    #[test]
    fn data_envelope_preserves_server_order() {
        let videos: Data<Video> = pares!(
            r#"{"data":[
                {"title":"b","url":"u1","created_at":"2024-01-02T00:00:00Z"},
                {"title":"a","url":"u2","created_at":"2024-01-03T00:00:00Z"},
                {"title":"c","url":"u3","created_at":"2024-01-01T00:00:00Z"}
            ]}"#
        )
        .unwrap();

        let titles = videos.data.iter().map(|v| v.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, ["b", "a", "c"]);
    }

    #[test]
    fn missing_data_field_reads_as_empty() {
        let users: Data<User> = pares!("{}").unwrap();
        assert!(users.data.is_empty());
    }

    #[test]
    fn user_tolerates_absent_optional_fields() {
        let users: Data<User> = pares!(r#"{"data":[{"id":"123"}]}"#).unwrap();
        assert_eq!(users.data[0].id, "123");
        assert!(users.data[0].login.is_empty());
    }
}
