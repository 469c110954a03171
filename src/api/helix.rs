use std::future::Future;

use reqwest::header::HeaderName;

use crate::{pares, Error};

use super::{
    auth::{Credentials, Token},
    flow::{Config, Creds},
    request::{self, VideoPeriod, VideoSort, VideoType},
    response::{Data, User, Video},
    TwitchResponse,
};

static CLIENT_ID: HeaderName = HeaderName::from_static("client-id");

/// Helix endpoints available to an app access token.
///
/// Every request carries the `Client-Id` header alongside the bearer token;
/// Helix rejects requests that only present one of the two.
pub trait HelixApi {
    fn token(&self) -> Token;
    fn credentials(&self) -> &Credentials;
    fn config(&self) -> &Config;

    /// Look up a user by login name.
    ///
    /// Helix returns at most one exact match per login. An empty `data` array
    /// means no such user and maps to `Ok(None)`; if the server ever returned
    /// several entries, the first one in server order wins.
    fn user_from_login<S: AsRef<str>>(
        &self,
        login: S,
    ) -> impl Future<Output = Result<Option<User>, Error>> {
        async move {
            let token = self.token();
            let TwitchResponse { body, .. } = request::get!("{}/users", self.config().api_url())
                .header(CLIENT_ID.clone(), self.credentials().id())
                .param("login", login.as_ref())
                .send(&token)
                .await?;
            let users: Data<User> = pares!(&body)?;
            Ok(users.data.into_iter().next())
        }
    }

    /// List a user's videos filtered by type, sort and period.
    ///
    /// Records come back in server order; no client-side re-sorting happens.
    /// The response cursor is ignored, so only the first page is returned.
    fn videos<I: AsRef<str>>(
        &self,
        user_id: I,
        kind: VideoType,
        sort: VideoSort,
        period: VideoPeriod,
    ) -> impl Future<Output = Result<Vec<Video>, Error>> {
        async move {
            let token = self.token();
            let TwitchResponse { body, .. } = request::get!("{}/videos", self.config().api_url())
                .header(CLIENT_ID.clone(), self.credentials().id())
                .param("user_id", user_id.as_ref())
                .param("type", kind)
                .param("sort", sort)
                .param("period", period)
                .send(&token)
                .await?;
            let videos: Data<Video> = pares!(&body)?;
            Ok(videos.data)
        }
    }

    /// Fetch a streamer's recent highlights.
    ///
    /// A login that resolves to no user is not an error: the result is
    /// `Ok(None)` and no videos request is issued. The trending/week
    /// parameterization is a relevance ranking within the last seven days,
    /// not a chronological ordering, and is kept as-is.
    fn highlights<S: AsRef<str>>(
        &self,
        login: S,
    ) -> impl Future<Output = Result<Option<Vec<Video>>, Error>> {
        async move {
            let Some(user) = self.user_from_login(login.as_ref()).await? else {
                log::warn!("no user matches login {:?}", login.as_ref());
                return Ok(None);
            };
            Ok(Some(
                self.videos(
                    &user.id,
                    VideoType::Highlight,
                    VideoSort::Trending,
                    VideoPeriod::Week,
                )
                .await?,
            ))
        }
    }
}

impl HelixApi for Creds {
    fn token(&self) -> Token {
        self.token.lock().unwrap().clone()
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
