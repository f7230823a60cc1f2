use async_trait::async_trait;
use tracing::trace;

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::traits::AccountApi;
use crate::riot::types::AccountDto;

#[async_trait]
impl AccountApi for RiotClient {
    /// Get account by Riot ID (game name + tag line)
    /// Uses regional routing (americas, europe, asia, sea)
    async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError> {
        trace!("get_account_by_riot_id {game_name}#{tag_line}");

        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.region_base(),
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );

        // An unknown Riot ID comes back as a 404 here, nowhere else.
        self.get(&url).await.map_err(|e| {
            if matches!(&e, AppError::RiotApi { status: 404, .. }) {
                AppError::PlayerNotFound {
                    game_name: game_name.to_string(),
                    tag_line: tag_line.to_string(),
                }
            } else {
                e
            }
        })
    }
}
