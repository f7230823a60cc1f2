use async_trait::async_trait;
use tracing::trace;

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::traits::SummonerApi;
use crate::riot::types::SummonerDto;

#[async_trait]
impl SummonerApi for RiotClient {
    /// Get summoner by PUUID (profile icon and level)
    /// Uses platform routing (na1, euw1, kr, ...)
    async fn get_summoner_by_puuid(&self, puuid: &str) -> Result<SummonerDto, AppError> {
        trace!("get_summoner_by_puuid {puuid}");

        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform_base(),
            puuid
        );

        self.get(&url).await
    }
}
