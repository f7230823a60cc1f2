use async_trait::async_trait;

use crate::error::AppError;

use super::types::{AccountDto, MatchDto, SummonerDto};

/// Riot Account-V1 API as described in the official documentation.
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError>;
}

/// Riot Summoner-V4 API as described in the official documentation.
#[async_trait]
pub trait SummonerApi: Send + Sync {
    async fn get_summoner_by_puuid(&self, puuid: &str) -> Result<SummonerDto, AppError>;
}

/// Riot Match-V5 API as described in the official documentation.
#[async_trait]
pub trait MatchApi: Send + Sync {
    async fn get_match_ids(&self, puuid: &str, count: u32) -> Result<Vec<String>, AppError>;

    async fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError>;
}

/// Full API surface required to run a player search.
pub trait LookupApi: AccountApi + SummonerApi + MatchApi {}
