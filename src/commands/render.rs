//! Text rendering for the surah list, surah and verse views

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use quran_explorer::quran::juz::juz_of_surah;
use quran_explorer::quran::reciter::short_reciter_name;
use quran_explorer::quran::types::BISMILLAH_TRANSLATION;
use quran_explorer::quran::{
    bismillah, Catalog, Reciter, Surah, SurahSummary, Translation, Verse, JUZ_COUNT, RECITERS,
};

/// Marks the end of a verse
const AYAH_MARK: &str = "۝";

/// Table of surahs
pub fn surah_table(surahs: &[&SurahSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("No."),
            Cell::new("Name"),
            Cell::new("Arabic"),
            Cell::new("Verses"),
            Cell::new("Revelation"),
        ]);

    for surah in surahs {
        table.add_row(vec![
            Cell::new(surah.number),
            Cell::new(&surah.info.surah_name),
            Cell::new(&surah.info.surah_name_arabic),
            Cell::new(surah.info.total_ayah),
            Cell::new(surah.info.revelation_place),
        ]);
    }

    table
}

/// Table of reciters, marking the selected one
pub fn reciter_table(selected: Option<&Reciter>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("ID"), Cell::new("Reciter"), Cell::new("")]);

    for reciter in RECITERS {
        let marker = if selected.is_some_and(|s| s.id == reciter.id) {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(reciter.id),
            Cell::new(reciter.name),
            Cell::new(marker),
        ]);
    }

    table
}

/// Catalog-wide counts shown on the home view
pub fn catalog_stats(catalog: &Catalog) -> String {
    let verses: u32 = catalog.values().map(|s| s.info.total_ayah).sum();
    format!(
        "{} surahs • {} verses • {} juz • {} reciters",
        catalog.len(),
        verses,
        JUZ_COUNT,
        RECITERS.len()
    )
}

/// Options for rendering a surah
pub struct SurahView<'a> {
    pub translation: Translation,
    pub reciter: &'a Reciter,
    /// Skip translation lines
    pub arabic_only: bool,
    /// URL currently playing, if any
    pub playing: Option<&'a str>,
}

/// Header, Bismillah and verses of a surah
pub fn format_surah(surah: &Surah, view: &SurahView<'_>) -> String {
    let info = &surah.info;
    let mut lines = vec![];

    lines.push(format!(
        "Surah {} • {} Verses • {}",
        surah.surah_no, info.total_ayah, info.revelation_place
    ));
    lines.push(info.surah_name.bold().to_string());
    if let Some(long) = &info.surah_name_arabic_long {
        lines.push(long.clone());
    }
    if let Some(translation) = &info.surah_name_translation {
        lines.push(translation.italic().to_string());
    }

    let juz = juz_of_surah(surah.surah_no);
    if !juz.is_empty() {
        let juz: Vec<String> = juz.iter().map(|j| j.to_string()).collect();
        lines.push(format!("Juz: {}", juz.join(", ")));
    }

    lines.push(format!("Reciter: {}", view.reciter.name));
    match surah.audio_for(view.reciter.id) {
        Some(track) => {
            let label = if view.playing == Some(track.url.as_str()) {
                "Pause Full Surah"
            } else {
                "Play Full Surah"
            };
            lines.push(format!("{}: {}", label, track.url.dimmed()));
        }
        None => lines.push("Full surah audio: (not available)".dimmed().to_string()),
    }

    lines.push(String::new());

    if let Some(opening) = bismillah(surah.surah_no) {
        lines.push(opening.to_string());
        if !view.arabic_only {
            lines.push(BISMILLAH_TRANSLATION.dimmed().to_string());
        }
        lines.push(String::new());
    }

    let translation = surah.translation(view.translation);
    for (index, arabic) in surah.arabic().iter().enumerate() {
        lines.push(format!("[{}] {} {}", index + 1, arabic, AYAH_MARK));
        if !view.arabic_only {
            if let Some(text) = translation.get(index).filter(|t| !t.is_empty()) {
                lines.push(format!("    {}", text));
            }
        }
    }

    lines.join("\n")
}

/// Verse card, recitations and surah info for a single verse
pub fn format_verse(verse: &Verse, translation: Translation, playing: Option<&str>) -> String {
    let info = &verse.info;
    let mut lines = vec![];

    lines.push(format!("{} • Verse {}", info.surah_name.bold(), verse.ayah_no));
    lines.push(String::new());
    lines.push(format!("{} {}", verse.arabic(), AYAH_MARK));
    lines.push("─".repeat(24));
    let text = verse.translation(translation);
    if text.is_empty() {
        lines.push(format!("({} translation not available)", translation).dimmed().to_string());
    } else {
        lines.push(text.to_string());
    }

    let tracks = verse.audio_tracks();
    if !tracks.is_empty() {
        lines.push(String::new());
        lines.push("Listen:".to_string());
        for (index, (_, track)) in tracks.iter().enumerate() {
            let is_playing = playing == Some(track.url.as_str());
            let marker = if is_playing { "⏸" } else { "▶" };
            let name = short_reciter_name(&track.reciter);
            let label = if is_playing {
                format!("{} {}", marker, name).green().to_string()
            } else {
                format!("{} {}", marker, name)
            };
            lines.push(format!("  {}. {}  {}", index + 1, label, track.url.dimmed()));
        }
    }

    lines.push(String::new());
    lines.push(format!("Surah: {}", info.surah_name));
    lines.push(format!("Verse: {}", verse.ayah_no));
    lines.push(format!("Total Verses: {}", info.total_ayah));
    lines.push(format!("Revelation: {}", info.revelation_place));

    lines.join("\n")
}
