//! Reciters and per-verse audio locations

use url::Url;

/// A reciter whose recordings the API serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reciter {
    /// Key used in the API's `audio` maps and in audio file paths
    pub id: &'static str,
    pub name: &'static str,
}

/// Reciters with both full-surah and per-verse recordings
pub const RECITERS: &[Reciter] = &[
    Reciter {
        id: "1",
        name: "Mishary Rashid Al Afasy",
    },
    Reciter {
        id: "2",
        name: "Abu Bakr Al Shatri",
    },
    Reciter {
        id: "3",
        name: "Nasser Al Qatami",
    },
    Reciter {
        id: "4",
        name: "Yasser Al Dosari",
    },
];

impl Reciter {
    pub fn find(id: &str) -> Option<&'static Reciter> {
        RECITERS.iter().find(|r| r.id == id.trim())
    }
}

/// Location of one verse's recitation: `{base}{reciter}/{surah}_{ayah}.mp3`
pub fn verse_audio_url(
    base: &Url,
    reciter: &str,
    surah_no: u16,
    ayah_no: u32,
) -> Result<Url, url::ParseError> {
    base.join(&format!("{}/{}_{}.mp3", reciter, surah_no, ayah_no))
}

/// Last two words of a reciter's name, used for compact labels
pub fn short_reciter_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let start = words.len().saturating_sub(2);
    words[start..].join(" ")
}
