//! quran-explorer library
//!
//! Typed access to the quranapi.pages.dev API, surah filtering, and
//! recitation playback for the `quran-explorer` CLI.
//!
//! # Disclaimer
//!
//! This tool is not affiliated with or endorsed by quranapi.pages.dev or
//! The Quran Project. Texts, translations and recordings are fetched from
//! their public endpoints at run time and are not redistributed.

pub mod audio;
pub mod config;
pub mod quran;
pub mod session;
