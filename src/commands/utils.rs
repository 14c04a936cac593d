//! Shared utilities for commands

use anyhow::{Context, Result};
use quran_explorer::audio::CommandOutput;
use quran_explorer::config::Config;
use quran_explorer::quran::{QuranClient, Reciter, Translation};

/// Build an API client from configuration
pub fn client(config: &Config) -> Result<QuranClient> {
    QuranClient::new(config.api_url.clone(), config.timeout())
        .context("Failed to create Quran API client")
}

/// Build the external-player output from configuration
pub fn player_output(config: &Config) -> CommandOutput {
    CommandOutput::new(config.player.program.clone(), config.player.args.clone())
}

/// Reciter from a command-line override, falling back to the configured one
pub fn resolve_reciter(config: &Config, id: Option<&str>) -> Result<&'static Reciter> {
    let id = id.unwrap_or(&config.reciter);
    Reciter::find(id)
        .with_context(|| format!("Unknown reciter '{}'. Run `quran-explorer reciters`", id))
}

/// Translation from a command-line override, falling back to the configured one
pub fn resolve_translation(config: &Config, lang: Option<&str>) -> Result<Translation> {
    match lang {
        Some(lang) => Translation::parse(lang)
            .with_context(|| format!("Invalid translation '{}'. Use en, bn or ur", lang)),
        None => Ok(config.translation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_reciter_override() {
        let config = Config::default();
        assert_eq!(resolve_reciter(&config, None).unwrap().id, "1");
        assert_eq!(resolve_reciter(&config, Some("4")).unwrap().id, "4");
        assert!(resolve_reciter(&config, Some("12")).is_err());
    }

    #[test]
    fn test_resolve_translation_override() {
        let config = Config::default();
        assert_eq!(
            resolve_translation(&config, None).unwrap(),
            Translation::English
        );
        assert_eq!(
            resolve_translation(&config, Some("ur")).unwrap(),
            Translation::Urdu
        );
        assert!(resolve_translation(&config, Some("xx")).is_err());
    }

    #[test]
    fn test_player_output_uses_config() {
        let config = Config::default();
        assert_eq!(player_output(&config).program(), "mpv");
    }
}
