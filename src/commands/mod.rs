//! CLI commands

pub mod browse;
pub mod list;
pub mod play;
pub mod reciters;
pub mod render;
pub mod surah;
pub mod utils;
pub mod verse;
