//! Surah command - Show every verse of a surah

use anyhow::{Context, Result};

use quran_explorer::config::Config;
use quran_explorer::quran::QuranSource;

use super::render::{self, SurahView};
use super::utils;

/// Options for the surah command
pub struct SurahOptions {
    pub surah: u16,
    /// Translation override: en, bn, ur
    pub translation: Option<String>,
    /// Reciter override for the full-surah audio link
    pub reciter: Option<String>,
    /// Omit translations
    pub arabic_only: bool,
}

/// Execute the surah command and return formatted output
pub fn execute(config: &Config, options: SurahOptions) -> Result<String> {
    let translation = utils::resolve_translation(config, options.translation.as_deref())?;
    let reciter = utils::resolve_reciter(config, options.reciter.as_deref())?;

    let client = utils::client(config)?;
    let surah = client
        .get_surah(options.surah)
        .with_context(|| format!("Failed to fetch surah {}", options.surah))?;

    Ok(render::format_surah(
        &surah,
        &SurahView {
            translation,
            reciter,
            arabic_only: options.arabic_only,
            playing: None,
        },
    ))
}
