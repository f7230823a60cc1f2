use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid Riot ID: {0:?} (expected Name#TAG)")]
    InvalidRiotId(String),

    #[error("Player not found: {game_name}#{tag_line}")]
    PlayerNotFound { game_name: String, tag_line: String },

    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
