use thiserror::Error;

use crate::model::PlaceId;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Duplicate place id in catalog: {0}")]
    DuplicatePlaceId(PlaceId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Map error: {0}")]
    Map(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
