use thiserror::Error;

#[derive(Error, Debug)]
pub enum WoundError {
    #[error("Unknown creature type: {0}")]
    UnknownCreature(String),

    #[error("Bleed threshold for ammo {ammo} must be within [0, 1], got {value}")]
    InvalidThreshold { ammo: String, value: f32 },

    #[error("Invalid bleed tuning: {0}")]
    InvalidTuning(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, WoundError>;
