//! Configuration: built-in defaults, an optional TOML file, then environment
//!
//! The file is read from `--config <path>` when given, otherwise from
//! `<config dir>/quran-explorer/config.toml` if it exists:
//! - macOS: ~/Library/Application Support/quran-explorer/config.toml
//! - Linux: ~/.config/quran-explorer/config.toml
//! - Windows: %APPDATA%/quran-explorer/config.toml

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::quran::{Reciter, Translation};

pub const DEFAULT_API_URL: &str = "https://quranapi.pages.dev/api/";
pub const DEFAULT_AUDIO_URL: &str = "https://the-quran-project.github.io/Quran-Audio/Data/";

/// External program used to play audio URLs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub program: String,
    /// Arguments placed before the URL
    pub args: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            program: "mpv".to_string(),
            args: vec!["--no-video".to_string(), "--really-quiet".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Quran JSON API
    pub api_url: Url,
    /// Base URL of per-verse recitation files
    pub audio_url: Url,
    /// Default reciter id
    pub reciter: String,
    pub translation: Translation,
    pub player: PlayerConfig,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            audio_url: Url::parse(DEFAULT_AUDIO_URL).expect("default audio URL is valid"),
            reciter: "1".to_string(),
            translation: Translation::English,
            player: PlayerConfig::default(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Resolve configuration for this run
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_file() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.normalize()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Override fields from `QURAN_*` variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("QURAN_API_URL") {
            self.api_url =
                Url::parse(&url).with_context(|| format!("Invalid QURAN_API_URL: {}", url))?;
        }
        if let Some(url) = lookup("QURAN_AUDIO_URL") {
            self.audio_url =
                Url::parse(&url).with_context(|| format!("Invalid QURAN_AUDIO_URL: {}", url))?;
        }
        if let Some(reciter) = lookup("QURAN_RECITER") {
            self.reciter = reciter;
        }
        if let Some(lang) = lookup("QURAN_TRANSLATION") {
            self.translation = Translation::parse(&lang)
                .with_context(|| format!("Invalid QURAN_TRANSLATION: {}", lang))?;
        }
        if let Some(program) = lookup("QURAN_PLAYER") {
            self.player.program = program;
        }
        Ok(())
    }

    /// Validate values and make base URLs joinable
    fn normalize(&mut self) -> Result<()> {
        ensure_trailing_slash(&mut self.api_url);
        ensure_trailing_slash(&mut self.audio_url);
        if Reciter::find(&self.reciter).is_none() {
            bail!("Unknown reciter '{}' (expected 1-4)", self.reciter);
        }
        if self.player.program.trim().is_empty() {
            bail!("Player program must not be empty");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Get the default config file location, if the platform has a config directory
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quran-explorer").join("config.toml"))
}

/// `Url::join` replaces the last path segment unless the base ends with `/`
fn ensure_trailing_slash(url: &mut Url) {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
}
