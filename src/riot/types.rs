use chrono::{DateTime, Utc};
use serde::Deserialize;

const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner ID. Not returned on every platform.
    pub id: Option<String>,
    pub puuid: String,
    pub profile_icon_id: i32,
    pub summoner_level: i32,
}

// ============================================================================
// Match-v5
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub metadata: MetadataDto,
    pub info: InfoDto,
}

impl MatchDto {
    pub fn match_id(&self) -> &str {
        &self.metadata.match_id
    }

    pub fn participant_of(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDto {
    pub match_id: String,
    /// PUUIDs of everyone in the match.
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    /// Unix timestamp in milliseconds.
    pub game_creation: i64,
    /// Game length in seconds.
    pub game_duration: i64,
    pub game_mode: String,
    pub participants: Vec<ParticipantDto>,
}

impl InfoDto {
    pub fn duration_formatted(&self) -> String {
        let minutes = self.game_duration / 60;
        let seconds = self.game_duration % 60;
        format!("{}:{:02}", minutes, seconds)
    }

    pub fn time_ago(&self) -> String {
        relative_time(self.game_creation, Utc::now())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub summoner_name: String,
    pub champion_name: String,
    pub champion_id: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub total_minions_killed: i32,
    pub neutral_minions_killed: i32,
    pub win: bool,
    // Items (6 slots + ward)
    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub item6: i32,
    pub gold_earned: i64,
    pub champ_level: i32,
    pub total_damage_dealt_to_champions: i64,
}

impl ParticipantDto {
    pub fn kda_ratio(&self) -> f64 {
        if self.deaths == 0 {
            (self.kills + self.assists) as f64
        } else {
            (self.kills + self.assists) as f64 / self.deaths as f64
        }
    }

    pub fn kda_formatted(&self) -> String {
        format!("{:.2}", self.kda_ratio())
    }

    pub fn cs_total(&self) -> i32 {
        self.total_minions_killed + self.neutral_minions_killed
    }

    /// Returns all item IDs (0 = empty slot)
    pub fn items(&self) -> [i32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }

    /// Item slots actually holding an item, in slot order.
    pub fn equipped_items(&self) -> Vec<i32> {
        self.items().into_iter().filter(|&id| id != 0).collect()
    }

    pub fn gold_formatted(&self) -> String {
        if self.gold_earned >= 1_000 {
            format!("{:.1}k", self.gold_earned as f64 / 1_000.0)
        } else {
            self.gold_earned.to_string()
        }
    }

    pub fn champion_icon_url(&self, version: &str) -> String {
        // Match-v5 reports "FiddleSticks" while Data Dragon serves "Fiddlesticks".
        let name = if self.champion_name == "FiddleSticks" {
            "Fiddlesticks"
        } else {
            self.champion_name.as_str()
        };
        format!("{DDRAGON_CDN}/{version}/img/champion/{name}.png")
    }
}

/// Render how long ago a timestamp is, coarsening with age.
pub fn relative_time(creation_ms: i64, now: DateTime<Utc>) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let elapsed = (now.timestamp_millis() - creation_ms).max(0) / 1000;

    if elapsed < MINUTE {
        "just now".to_string()
    } else if elapsed < HOUR {
        format!("{}m ago", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{}h ago", elapsed / HOUR)
    } else {
        format!("{}d ago", elapsed / DAY)
    }
}

// ============================================================================
// Data Dragon assets
// ============================================================================

pub fn profile_icon_url(version: &str, icon_id: i32) -> String {
    format!("{DDRAGON_CDN}/{version}/img/profileicon/{icon_id}.png")
}

pub fn item_icon_url(version: &str, item_id: i32) -> String {
    format!("{DDRAGON_CDN}/{version}/img/item/{item_id}.png")
}
