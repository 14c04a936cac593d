//! Play command - Recite a surah or a single verse

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::time::Duration;

use quran_explorer::audio::Player;
use quran_explorer::config::Config;
use quran_explorer::quran::reciter::verse_audio_url;
use quran_explorer::quran::QuranSource;

use super::utils;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Options for the play command
pub struct PlayOptions {
    pub surah: u16,
    /// Play only this verse
    pub ayah: Option<u32>,
    /// Reciter override
    pub reciter: Option<String>,
    /// Print the audio URL instead of playing it
    pub print_url: bool,
}

/// Execute the play command, blocking until playback ends
pub fn execute(config: &Config, options: PlayOptions) -> Result<()> {
    let reciter = utils::resolve_reciter(config, options.reciter.as_deref())?;

    let url = match options.ayah {
        Some(0) => anyhow::bail!("Verse numbers start at 1"),
        Some(ayah) => verse_audio_url(&config.audio_url, reciter.id, options.surah, ayah)
            .context("Failed to build verse audio URL")?
            .to_string(),
        None => {
            let client = utils::client(config)?;
            let surah = client
                .get_surah(options.surah)
                .with_context(|| format!("Failed to fetch surah {}", options.surah))?;
            surah
                .audio_for(reciter.id)
                .map(|track| track.url.clone())
                .with_context(|| {
                    format!(
                        "No full-surah recording by {} for surah {}",
                        reciter.name, options.surah
                    )
                })?
        }
    };

    if options.print_url {
        println!("{}", url);
        return Ok(());
    }

    let what = match options.ayah {
        Some(ayah) => format!("surah {}, verse {}", options.surah, ayah),
        None => format!("surah {}", options.surah),
    };
    println!(
        "{} {} ({})",
        "Playing".green(),
        what,
        reciter.name.dimmed()
    );

    let mut player = Player::new(utils::player_output(config));
    player
        .toggle(&url)
        .with_context(|| format!("Failed to play {}", url))?;
    player.wait_until_finished(POLL_INTERVAL)?;

    println!("{}", "Finished.".dimmed());
    Ok(())
}
