use thiserror::Error;

use crate::armor::loader::LoadError;

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog load error: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
