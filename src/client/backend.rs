//! Typed fetches against the tournament, matchmaking and player services.

use crate::client::error::ClientError;
use crate::client::image_cache::{Image, ImageCache, ImageKind};
use crate::config::{BackendUrls, Config};
use crate::models::{
    GameMatch, PlayerId, StandingEntry, SwissBracket, SwissBracketId, Tournament, TournamentId,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Client for all backend services. `auth` arguments are forwarded verbatim as the
/// `Authorization` header.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    urls: BackendUrls,
    images: Arc<ImageCache>,
}

impl BackendClient {
    pub fn new(config: &Config, images: Arc<ImageCache>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .build()?;
        Ok(Self {
            http,
            urls: config.backends.clone(),
            images,
        })
    }

    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    /// GET {tournament}/tournaments/{id}
    pub async fn tournament(
        &self,
        id: TournamentId,
        auth: Option<&str>,
    ) -> Result<Tournament, ClientError> {
        let url = format!("{}/tournaments/{}", self.urls.tournament, id);
        self.get_json(url, auth).await
    }

    /// GET {matchmaking}/matches/tournament/{id}
    pub async fn matches(
        &self,
        tournament_id: TournamentId,
        auth: Option<&str>,
    ) -> Result<Vec<GameMatch>, ClientError> {
        let url = format!("{}/matches/tournament/{}", self.urls.matchmaking, tournament_id);
        self.get_json(url, auth).await
    }

    /// GET {matchmaking}/swiss-brackets/{id}
    pub async fn swiss_bracket(
        &self,
        id: SwissBracketId,
        auth: Option<&str>,
    ) -> Result<SwissBracket, ClientError> {
        let url = format!("{}/swiss-brackets/{}", self.urls.matchmaking, id);
        self.get_json(url, auth).await
    }

    /// GET {matchmaking}/swiss-brackets/{id}/standings
    pub async fn swiss_standings(
        &self,
        id: SwissBracketId,
        auth: Option<&str>,
    ) -> Result<Vec<StandingEntry>, ClientError> {
        let url = format!("{}/swiss-brackets/{}/standings", self.urls.matchmaking, id);
        self.get_json(url, auth).await
    }

    pub async fn player_photo(
        &self,
        id: PlayerId,
        auth: Option<&str>,
    ) -> Result<Option<Image>, ClientError> {
        self.photo(ImageKind::Player, id, auth).await
    }

    pub async fn tournament_photo(
        &self,
        id: TournamentId,
        auth: Option<&str>,
    ) -> Result<Option<Image>, ClientError> {
        self.photo(ImageKind::Tournament, id, auth).await
    }

    /// Photo from the cache, or fetched once and cached. `None` means "use the default image".
    async fn photo(
        &self,
        kind: ImageKind,
        id: i64,
        auth: Option<&str>,
    ) -> Result<Option<Image>, ClientError> {
        if let Some(cached) = self.images.get(kind, id) {
            return Ok(cached);
        }
        let url = match kind {
            ImageKind::Player => format!("{}/players/{}/photo", self.urls.player, id),
            ImageKind::Tournament => format!("{}/tournaments/{}/photo", self.urls.tournament, id),
        };
        let resp = self.request(&url, auth).send().await?;
        let status = resp.status();
        let image = if status == StatusCode::NOT_FOUND || status == StatusCode::NO_CONTENT {
            None
        } else if status.is_success() {
            let content_type = resp
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
                .to_string();
            let bytes = resp.bytes().await?;
            if bytes.is_empty() {
                None
            } else {
                Some(Image {
                    content_type,
                    bytes: bytes.to_vec(),
                })
            }
        } else {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        };
        if image.is_none() {
            log::debug!("No photo at {}, using default", url);
        }
        self.images.insert(kind, id, image.clone());
        Ok(image)
    }

    fn request(&self, url: &str, auth: Option<&str>) -> reqwest::RequestBuilder {
        let req = self.http.get(url);
        match auth {
            Some(value) => req.header(AUTHORIZATION, value),
            None => req,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        auth: Option<&str>,
    ) -> Result<T, ClientError> {
        log::debug!("GET {}", url);
        let resp = self.request(&url, auth).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(url));
        }
        if !status.is_success() {
            log::warn!("Backend returned {} for {}", status, url);
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { url, source })
    }
}
