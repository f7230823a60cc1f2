use std::env;

use crate::error::AppError;
use crate::riot::client::CredentialProvider;
use crate::riot::region::Platform;
use crate::search::DEFAULT_MATCH_COUNT;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub platform: Platform,
    pub match_count: u32,
    pub ddragon_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_DDRAGON_VERSION: &str = "15.19.1";

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let platform = match env::var("RIOT_PLATFORM") {
            Ok(v) => v.parse()?,
            Err(_) => Platform::NA1,
        };

        let match_count = env::var("MATCH_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MATCH_COUNT);

        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.into());

        Ok(Self {
            riot_api_key,
            platform,
            match_count,
            ddragon_version,
        })
    }
}

impl CredentialProvider for Config {
    fn api_key(&self) -> &str {
        &self.riot_api_key
    }
}
