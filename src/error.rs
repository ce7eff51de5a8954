//! Errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Descriptor(#[from] bdui_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
