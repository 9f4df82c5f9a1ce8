//! Error types for the contact service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContactError>;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Read error: {0}")]
    Read(String),
}
