//! Quran data: API client, data model and catalog filtering

pub mod client;
pub mod error;
pub mod filter;
pub mod juz;
pub mod reciter;
pub mod types;

pub use client::{QuranClient, QuranSource};
pub use error::{Error, Result};
pub use filter::{filter_surahs, Category, SurahFilter};
pub use juz::JUZ_COUNT;
pub use reciter::{Reciter, RECITERS};
pub use types::{
    bismillah, AudioTrack, Catalog, RevelationPlace, Surah, SurahInfo, SurahSummary, Translation,
    Verse, SURAH_COUNT,
};
