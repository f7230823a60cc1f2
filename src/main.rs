use std::{env, process, sync::Arc};

use tracing::{error, info};

use riftstats::config::Config;
use riftstats::error::AppError;
use riftstats::logging;
use riftstats::riot::RiotClient;
use riftstats::search::{PlayerSearch, PlayerSearchResult};

#[tokio::main]
async fn main() {
    logging::init();

    let query = match env::args().nth(1) {
        Some(q) => q,
        None => {
            eprintln!("Usage: riftstats <Name#TAG>");
            process::exit(2);
        }
    };

    if let Err(e) = run(&query).await {
        error!("lookup failed: {e}");
        eprintln!("{}", user_message(&e));
        process::exit(1);
    }
}

async fn run(query: &str) -> Result<(), AppError> {
    let config = Config::from_env()?;

    info!("🔎 searching {} on {}", query, config.platform);

    let client = Arc::new(RiotClient::new(
        Arc::new(config.clone()),
        config.platform,
    ));
    let search = PlayerSearch::with_match_count(client, config.match_count);

    let result = search.lookup(query).await?;
    print_result(&result, &config.ddragon_version);

    Ok(())
}

/// Specific messages for the failures a user can act on, a generic one for
/// everything else (details go to the log).
fn user_message(e: &AppError) -> String {
    match e {
        AppError::InvalidRiotId(_) => "Invalid format. Use Name#TAG".to_string(),
        AppError::PlayerNotFound {
            game_name,
            tag_line,
        } => format!("Player not found: {game_name}#{tag_line}"),
        AppError::Config(msg) => format!("Configuration error: {msg}"),
        _ => "Something went wrong while contacting the Riot API. Try again later.".to_string(),
    }
}

fn print_result(result: &PlayerSearchResult, ddragon_version: &str) {
    let player = &result.player;

    println!("{} (level {})", player.display_name(), player.summoner_level);
    println!("{}", player.profile_icon_url(ddragon_version));
    println!();

    if result.matches.is_empty() {
        println!("No recent matches.");
        return;
    }

    println!("Recent matches:");
    for m in &result.matches {
        // The searched player is always one of the ten participants.
        let Some(p) = m.participant_of(&player.puuid) else {
            continue;
        };

        println!(
            "  {:7}  {:14}  {}/{}/{}  KDA {}  CS {}  {}  {}",
            if p.win { "Victory" } else { "Defeat" },
            p.champion_name,
            p.kills,
            p.deaths,
            p.assists,
            p.kda_formatted(),
            p.cs_total(),
            m.info.duration_formatted(),
            m.info.time_ago(),
        );
        println!(
            "           {}  level {}  gold {}  damage {}  items {:?}",
            m.info.game_mode,
            p.champ_level,
            p.gold_formatted(),
            p.total_damage_dealt_to_champions,
            p.equipped_items(),
        );
    }
}
