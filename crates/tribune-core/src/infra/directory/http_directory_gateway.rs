// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::domain::directory::models::{DirectoryError, DirectoryId, RepresentativeCard};
use crate::domain::directory::services::DirectoryGateway;

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        DirectoryConfig {
            base_url: Url::parse("http://localhost:8001/api/")
                .expect("Invalid default directory URL"),
            request_timeout: Duration::from_secs(10),
            cache_ttl: Duration::from_secs(300),
        }
    }
}

/// Directory client talking to the representative directory's REST API.
/// Every request carries the configured timeout; timeouts and connection
/// failures surface as `DirectoryError::Unavailable`.
pub struct HttpDirectoryGateway {
    base_url: Url,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RepresentativePayload {
    id: String,
    name: String,
    governorate_name: Option<String>,
    district_name: Option<String>,
    party_name: Option<String>,
    average_rating: Option<f32>,
    #[serde(default)]
    is_featured: bool,
}

impl From<RepresentativePayload> for RepresentativeCard {
    fn from(payload: RepresentativePayload) -> Self {
        RepresentativeCard {
            id: payload.id.into(),
            name: payload.name,
            governorate: payload.governorate_name,
            district: payload.district_name,
            party: payload.party_name,
            average_rating: payload.average_rating,
            is_featured: payload.is_featured,
        }
    }
}

impl HttpDirectoryGateway {
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        Ok(HttpDirectoryGateway {
            base_url: config.base_url.clone(),
            client: reqwest::Client::builder()
                .timeout(config.request_timeout)
                .build()?,
        })
    }

    fn representative_url(&self, id: &DirectoryId) -> Result<Url, DirectoryError> {
        self.base_url
            .join(&format!("representatives/{id}/"))
            .map_err(|error| DirectoryError::UnexpectedResponse {
                reason: format!("Could not build directory URL: {error}"),
            })
    }
}

fn map_request_error(error: reqwest::Error) -> DirectoryError {
    if error.is_timeout() || error.is_connect() {
        return DirectoryError::Unavailable {
            reason: error.to_string(),
        };
    }
    if let Some(status) = error.status() {
        if status.is_server_error() {
            return DirectoryError::Unavailable {
                reason: status.to_string(),
            };
        }
    }
    DirectoryError::UnexpectedResponse {
        reason: error.to_string(),
    }
}

#[async_trait]
impl DirectoryGateway for HttpDirectoryGateway {
    async fn exists(&self, id: &DirectoryId) -> Result<bool, DirectoryError> {
        Ok(self.fetch_metadata(id).await?.is_some())
    }

    async fn fetch_metadata(
        &self,
        id: &DirectoryId,
    ) -> Result<Option<RepresentativeCard>, DirectoryError> {
        let response = self
            .client
            .get(self.representative_url(id)?)
            .send()
            .await
            .map_err(map_request_error)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response.error_for_status().map_err(map_request_error)?;
        let payload = response
            .json::<RepresentativePayload>()
            .await
            .map_err(|error| DirectoryError::UnexpectedResponse {
                reason: error.to_string(),
            })?;

        Ok(Some(payload.into()))
    }
}
