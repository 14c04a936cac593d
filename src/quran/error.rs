//! Errors raised while talking to the Quran API

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("surah number {0} is out of range (1-114)")]
    InvalidSurah(u16),

    #[error("verse {ayah} is not a valid verse number for surah {surah}")]
    InvalidVerse { surah: u16, ayah: u32 },

    #[error("invalid endpoint path {path}: {source}")]
    Url {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
