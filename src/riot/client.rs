use std::{fmt::Debug, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use serde::de::DeserializeOwned;

use crate::error::AppError;

use super::region::Platform;

/// Source of the API key attached to every outgoing request.
///
/// Injected at construction so the client never reads ambient global state.
pub trait CredentialProvider: Send + Sync + Debug {
    fn api_key(&self) -> &str;
}

impl CredentialProvider for String {
    fn api_key(&self) -> &str {
        self
    }
}

#[derive(Debug)]
pub struct RiotClient {
    http: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    credentials: Arc<dyn CredentialProvider>,
    /// Regional routing host (Account-V1, Match-V5).
    region_base: String,
    /// Platform routing host (Summoner-V4).
    platform_base: String,
}

impl RiotClient {
    pub fn new(credentials: Arc<dyn CredentialProvider>, platform: Platform) -> Self {
        Self::with_base_urls(
            credentials,
            platform.to_region().base_url(),
            platform.base_url(),
        )
    }

    /// Build a client pointing at custom API hosts.
    pub fn with_base_urls(
        credentials: Arc<dyn CredentialProvider>,
        region_base: String,
        platform_base: String,
    ) -> Self {
        let q = Quota::per_minute(nonzero!(100_u32)).allow_burst(nonzero!(20_u32));

        Self {
            http: reqwest::Client::new(),
            limiter: RateLimiter::direct(q),
            credentials,
            region_base,
            platform_base,
        }
    }

    pub(crate) fn region_base(&self) -> &str {
        &self.region_base
    }

    pub(crate) fn platform_base(&self) -> &str {
        &self.platform_base
    }

    /// Shared request logic for every endpoint.
    ///
    /// Waits on the rate limiter, authenticates, then classifies: non-2xx
    /// becomes [`AppError::RiotApi`], transport and decoding failures become
    /// [`AppError::Http`].
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        // Stay under the Riot API rate limits before doing any request
        self.limiter.until_ready().await;

        let res = self
            .http
            .get(url)
            .header("X-Riot-Token", self.credentials.api_key())
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            return Err(AppError::RiotApi {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res.json().await?)
    }
}
