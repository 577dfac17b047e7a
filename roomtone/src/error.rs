//! Error types for roomtone

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomToneError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, RoomToneError>;
