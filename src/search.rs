//! Player lookup flow, from account resolution down to per-match details.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AppError;
use crate::riot::traits::LookupApi;
use crate::riot::types::{AccountDto, MatchDto, SummonerDto, profile_icon_url};

/// Number of recent matches fetched when no explicit count is configured.
pub const DEFAULT_MATCH_COUNT: u32 = 5;

/// A public `Name#TAG` player identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for RiotId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exactly one separator, with something on both sides.
        let Some((game_name, tag_line)) = s.split_once('#') else {
            return Err(AppError::InvalidRiotId(s.to_string()));
        };
        if game_name.is_empty() || tag_line.is_empty() || tag_line.contains('#') {
            return Err(AppError::InvalidRiotId(s.to_string()));
        }

        Ok(Self {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

/// Account and summoner data merged into one presentable player record.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display identity key: the summoner ID when the platform returns one,
    /// the PUUID otherwise.
    pub id: String,
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
    pub summoner_level: i32,
    pub profile_icon_id: i32,
}

impl Player {
    fn from_parts(account: AccountDto, summoner: SummonerDto) -> Self {
        Self {
            id: summoner.id.unwrap_or_else(|| account.puuid.clone()),
            puuid: account.puuid,
            game_name: account.game_name,
            tag_line: account.tag_line,
            summoner_level: summoner.summoner_level,
            profile_icon_id: summoner.profile_icon_id,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }

    pub fn profile_icon_url(&self, version: &str) -> String {
        profile_icon_url(version, self.profile_icon_id)
    }
}

/// Composed output of one lookup. `matches` keeps the upstream recency order.
#[derive(Debug)]
pub struct PlayerSearchResult {
    pub player: Player,
    pub matches: Vec<MatchDto>,
}

/// Chains the Riot API calls needed to present a player.
pub struct PlayerSearch<Api> {
    api: Arc<Api>,
    match_count: u32,
}

impl<Api: LookupApi> PlayerSearch<Api> {
    pub fn new(api: Arc<Api>) -> Self {
        Self::with_match_count(api, DEFAULT_MATCH_COUNT)
    }

    pub fn with_match_count(api: Arc<Api>, match_count: u32) -> Self {
        Self { api, match_count }
    }

    /// Look up a player from a raw `Name#TAG` query.
    ///
    /// The account, summoner and match-ID stages fail fast; a match detail
    /// that fails to load only shrinks the result. Dropping the returned
    /// future aborts whatever request is in flight.
    pub async fn lookup(&self, raw: &str) -> Result<PlayerSearchResult, AppError> {
        let riot_id: RiotId = raw.parse()?;
        self.lookup_id(&riot_id).await
    }

    pub async fn lookup_id(&self, riot_id: &RiotId) -> Result<PlayerSearchResult, AppError> {
        debug!("looking up {riot_id}");

        let account = self
            .api
            .get_account_by_riot_id(&riot_id.game_name, &riot_id.tag_line)
            .await?;
        let summoner = self.api.get_summoner_by_puuid(&account.puuid).await?;
        let match_ids = self
            .api
            .get_match_ids(&account.puuid, self.match_count)
            .await?;
        let matches = self.fetch_matches_best_effort(match_ids).await;

        Ok(PlayerSearchResult {
            player: Player::from_parts(account, summoner),
            matches,
        })
    }

    /// Fetch details for every ID, dropping the ones that fail.
    ///
    /// Failures are logged and skipped; survivors keep the incoming order.
    async fn fetch_matches_best_effort(&self, match_ids: Vec<String>) -> Vec<MatchDto> {
        let mut matches = Vec::with_capacity(match_ids.len());
        for match_id in match_ids {
            match self.api.get_match(&match_id).await {
                Ok(m) => matches.push(m),
                Err(e) => warn!("skipping match {match_id}: {e}"),
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::riot::traits::{AccountApi, MatchApi, SummonerApi};
    use crate::riot::types::{InfoDto, MetadataDto, ParticipantDto};

    const PUUID: &str = "puuid-1";

    #[derive(Default)]
    struct MockApi {
        account_not_found: bool,
        summoner_id: Option<String>,
        match_ids: Vec<String>,
        failing_match_ids: Vec<String>,
        account_calls: AtomicUsize,
        summoner_calls: AtomicUsize,
        match_id_calls: AtomicUsize,
        match_calls: AtomicUsize,
    }

    fn match_dto(match_id: &str) -> MatchDto {
        MatchDto {
            metadata: MetadataDto {
                match_id: match_id.to_string(),
                participants: vec![PUUID.to_string()],
            },
            info: InfoDto {
                game_creation: 1_700_000_000_000,
                game_duration: 1885,
                game_mode: "CLASSIC".to_string(),
                participants: vec![ParticipantDto {
                    puuid: PUUID.to_string(),
                    summoner_name: "Faker".to_string(),
                    champion_name: "Azir".to_string(),
                    champion_id: 268,
                    kills: 4,
                    deaths: 2,
                    assists: 6,
                    total_minions_killed: 220,
                    neutral_minions_killed: 12,
                    win: true,
                    item0: 3340,
                    item1: 0,
                    item2: 6655,
                    item3: 0,
                    item4: 0,
                    item5: 0,
                    item6: 3363,
                    gold_earned: 12_345,
                    champ_level: 18,
                    total_damage_dealt_to_champions: 24_000,
                }],
            },
        }
    }

    #[async_trait]
    impl AccountApi for MockApi {
        async fn get_account_by_riot_id(
            &self,
            game_name: &str,
            tag_line: &str,
        ) -> Result<AccountDto, AppError> {
            self.account_calls.fetch_add(1, Ordering::Relaxed);
            if self.account_not_found {
                return Err(AppError::PlayerNotFound {
                    game_name: game_name.to_string(),
                    tag_line: tag_line.to_string(),
                });
            }
            Ok(AccountDto {
                puuid: PUUID.to_string(),
                game_name: game_name.to_string(),
                tag_line: tag_line.to_string(),
            })
        }
    }

    #[async_trait]
    impl SummonerApi for MockApi {
        async fn get_summoner_by_puuid(&self, puuid: &str) -> Result<SummonerDto, AppError> {
            self.summoner_calls.fetch_add(1, Ordering::Relaxed);
            Ok(SummonerDto {
                id: self.summoner_id.clone(),
                puuid: puuid.to_string(),
                profile_icon_id: 4567,
                summoner_level: 612,
            })
        }
    }

    #[async_trait]
    impl MatchApi for MockApi {
        async fn get_match_ids(&self, _puuid: &str, count: u32) -> Result<Vec<String>, AppError> {
            self.match_id_calls.fetch_add(1, Ordering::Relaxed);
            Ok(self
                .match_ids
                .iter()
                .take(count as usize)
                .cloned()
                .collect())
        }

        async fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
            self.match_calls.fetch_add(1, Ordering::Relaxed);
            if self.failing_match_ids.iter().any(|id| id == match_id) {
                return Err(AppError::RiotApi {
                    status: 500,
                    message: String::new(),
                });
            }
            Ok(match_dto(match_id))
        }
    }

    impl LookupApi for MockApi {}

    #[test]
    fn riot_id_parses_and_displays() {
        let riot_id: RiotId = "Faker#KR1".parse().unwrap();
        assert_eq!(riot_id.game_name, "Faker");
        assert_eq!(riot_id.tag_line, "KR1");
        assert_eq!(riot_id.to_string(), "Faker#KR1");
    }

    #[tokio::test]
    async fn invalid_riot_id_fails_without_any_request() {
        let api = Arc::new(MockApi::default());
        let search = PlayerSearch::new(api.clone());

        for raw in ["Faker", "Faker#", "#KR1", "Fa#ker#KR1", "", "#"] {
            let res = search.lookup(raw).await;
            assert!(
                matches!(res, Err(AppError::InvalidRiotId(_))),
                "{raw:?} should be rejected"
            );
        }

        assert_eq!(api.account_calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn unknown_player_short_circuits() {
        let api = Arc::new(MockApi {
            account_not_found: true,
            ..Default::default()
        });
        let search = PlayerSearch::new(api.clone());

        let res = search.lookup("Ghost#NA1").await;

        assert!(matches!(res, Err(AppError::PlayerNotFound { .. })));
        assert_eq!(api.summoner_calls.load(Ordering::Relaxed), 0);
        assert_eq!(api.match_id_calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn failing_match_details_are_dropped_in_order() {
        let api = Arc::new(MockApi {
            match_ids: (1..=5).map(|n| format!("KR_{n}")).collect(),
            failing_match_ids: vec!["KR_3".to_string()],
            ..Default::default()
        });
        let search = PlayerSearch::new(api.clone());

        let result = search.lookup("Faker#KR1").await.unwrap();

        let ids: Vec<&str> = result.matches.iter().map(|m| m.match_id()).collect();
        assert_eq!(ids, ["KR_1", "KR_2", "KR_4", "KR_5"]);
        // Every ID was still attempted.
        assert_eq!(api.match_calls.load(Ordering::Relaxed), 5);
    }

    #[tokio::test]
    async fn match_count_caps_the_request() {
        let api = Arc::new(MockApi {
            match_ids: (1..=10).map(|n| format!("KR_{n}")).collect(),
            ..Default::default()
        });
        let search = PlayerSearch::with_match_count(api, 3);

        let result = search.lookup("Faker#KR1").await.unwrap();

        assert_eq!(result.matches.len(), 3);
    }

    #[tokio::test]
    async fn player_identity_prefers_summoner_id() {
        let api = Arc::new(MockApi {
            summoner_id: Some("summ-1".to_string()),
            ..Default::default()
        });
        let search = PlayerSearch::new(api);
        let result = search.lookup("Faker#KR1").await.unwrap();
        assert_eq!(result.player.id, "summ-1");
        assert_eq!(result.player.display_name(), "Faker#KR1");

        let api = Arc::new(MockApi::default());
        let search = PlayerSearch::new(api);
        let result = search.lookup("Faker#KR1").await.unwrap();
        assert_eq!(result.player.id, PUUID);
    }
}
