//! Reciters command - Show available reciters

use anyhow::Result;

use quran_explorer::config::Config;

use super::{render, utils};

/// Execute the reciters command and return formatted output
pub fn execute(config: &Config) -> Result<String> {
    let selected = utils::resolve_reciter(config, None)?;
    let mut output = render::reciter_table(Some(selected)).to_string();
    output.push_str("\n\n* default reciter (set `reciter` in the config file or QURAN_RECITER)");
    Ok(output)
}
