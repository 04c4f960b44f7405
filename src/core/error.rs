use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexError {
    #[error("Invalid direction index: {0} (expected 0-5)")]
    InvalidDirection(u8),

    #[error("Unknown biome: {0}")]
    UnknownBiome(String),

    #[error("Unknown occupier type: {0}")]
    UnknownOccupierType(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Armies tick interval is not configured (stamina.tick_interval_secs)")]
    MissingTickInterval,

    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, HexError>;
