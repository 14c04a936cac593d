//! Verse command - Show a single verse with its recitations

use anyhow::{Context, Result};

use quran_explorer::config::Config;
use quran_explorer::quran::QuranSource;

use super::{render, utils};

/// Options for the verse command
pub struct VerseOptions {
    pub surah: u16,
    pub ayah: u32,
    /// Translation override: en, bn, ur
    pub translation: Option<String>,
}

/// Execute the verse command and return formatted output
pub fn execute(config: &Config, options: VerseOptions) -> Result<String> {
    let translation = utils::resolve_translation(config, options.translation.as_deref())?;

    let client = utils::client(config)?;
    let verse = client
        .get_verse(options.surah, options.ayah)
        .with_context(|| format!("Failed to fetch verse {}:{}", options.surah, options.ayah))?;

    Ok(render::format_verse(&verse, translation, None))
}
