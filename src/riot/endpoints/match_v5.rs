use async_trait::async_trait;
use tracing::trace;

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::traits::MatchApi;
use crate::riot::types::MatchDto;

#[async_trait]
impl MatchApi for RiotClient {
    /// Get the most recent match IDs for a PUUID, newest first
    /// Uses regional routing (americas, europe, asia, sea)
    async fn get_match_ids(&self, puuid: &str, count: u32) -> Result<Vec<String>, AppError> {
        trace!("get_match_ids {puuid} (count {count})");

        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
            self.region_base(),
            puuid,
            count
        );

        self.get(&url).await
    }

    /// Get match details by match ID
    /// Uses regional routing (americas, europe, asia, sea)
    async fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        trace!("get_match {match_id}");

        let url = format!("{}/lol/match/v5/matches/{}", self.region_base(), match_id);

        self.get(&url).await
    }
}
