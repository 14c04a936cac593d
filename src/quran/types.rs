//! Data model for the quranapi.pages.dev JSON payloads

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of surahs in the Quran
pub const SURAH_COUNT: u16 = 114;

/// Opening line recited before every surah except Al-Fatihah and At-Tawbah
pub const BISMILLAH: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ";

/// English rendering of [`BISMILLAH`]
pub const BISMILLAH_TRANSLATION: &str =
    "In the name of Allah, the Most Gracious, the Most Merciful";

/// Where a surah was revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevelationPlace {
    Mecca,
    Madina,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for RevelationPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mecca => write!(f, "Mecca"),
            Self::Madina => write!(f, "Madina"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Translation language offered by the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Translation {
    #[default]
    English,
    Bengali,
    Urdu,
}

impl Translation {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "bn" | "bengali" => Some(Self::Bengali),
            "ur" | "urdu" => Some(Self::Urdu),
            _ => None,
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::Bengali => write!(f, "bengali"),
            Self::Urdu => write!(f, "urdu"),
        }
    }
}

/// Metadata shared by the list, surah and verse payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahInfo {
    pub surah_name: String,
    pub surah_name_arabic: String,
    #[serde(default)]
    pub surah_name_arabic_long: Option<String>,
    #[serde(default)]
    pub surah_name_translation: Option<String>,
    pub revelation_place: RevelationPlace,
    pub total_ayah: u32,
}

/// A surah as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahSummary {
    /// 1-based surah number
    pub number: u16,
    pub info: SurahInfo,
}

/// Surahs keyed by number, in Mushaf order
pub type Catalog = BTreeMap<u16, SurahSummary>;

/// Number the list payload, which carries no surah numbers of its own
pub fn catalog_from_list(list: Vec<SurahInfo>) -> Catalog {
    (1u16..)
        .zip(list)
        .map(|(number, info)| (number, SurahSummary { number, info }))
        .collect()
}

/// One recitation of a surah or verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrack {
    pub reciter: String,
    pub url: String,
    #[serde(default)]
    pub original_url: Option<String>,
}

/// A full surah with every verse
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    #[serde(flatten)]
    pub info: SurahInfo,
    #[serde(default)]
    pub surah_no: u16,
    /// Full-surah recitations keyed by reciter id
    #[serde(default)]
    pub audio: BTreeMap<String, AudioTrack>,
    /// Arabic with diacritics
    #[serde(default)]
    pub arabic1: Vec<String>,
    /// Arabic without diacritics
    #[serde(default)]
    pub arabic2: Vec<String>,
    #[serde(default)]
    pub english: Vec<String>,
    #[serde(default)]
    pub bengali: Vec<String>,
    #[serde(default)]
    pub urdu: Vec<String>,
}

impl Surah {
    /// Arabic verses, preferring the text with diacritics
    pub fn arabic(&self) -> &[String] {
        if self.arabic1.is_empty() {
            &self.arabic2
        } else {
            &self.arabic1
        }
    }

    pub fn translation(&self, translation: Translation) -> &[String] {
        match translation {
            Translation::English => &self.english,
            Translation::Bengali => &self.bengali,
            Translation::Urdu => &self.urdu,
        }
    }

    /// Full-surah recitation for a reciter id
    pub fn audio_for(&self, reciter: &str) -> Option<&AudioTrack> {
        self.audio.get(reciter)
    }
}

/// A single verse
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    #[serde(flatten)]
    pub info: SurahInfo,
    #[serde(default)]
    pub surah_no: u16,
    pub ayah_no: u32,
    #[serde(default)]
    pub audio: BTreeMap<String, AudioTrack>,
    #[serde(default)]
    pub arabic1: String,
    #[serde(default)]
    pub arabic2: String,
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub bengali: String,
    #[serde(default)]
    pub urdu: String,
}

impl Verse {
    /// Maximum number of recitations offered for a single verse
    pub const MAX_TRACKS: usize = 4;

    pub fn arabic(&self) -> &str {
        if self.arabic1.is_empty() {
            &self.arabic2
        } else {
            &self.arabic1
        }
    }

    pub fn translation(&self, translation: Translation) -> &str {
        match translation {
            Translation::English => &self.english,
            Translation::Bengali => &self.bengali,
            Translation::Urdu => &self.urdu,
        }
    }

    /// Recitations offered for this verse, in numeric reciter id order
    pub fn audio_tracks(&self) -> Vec<(&str, &AudioTrack)> {
        let mut tracks: Vec<_> = self
            .audio
            .iter()
            .map(|(id, track)| (id.as_str(), track))
            .collect();
        // Map keys sort as strings, so "10" would land before "2".
        tracks.sort_by_key(|(id, _)| id.parse::<u32>().unwrap_or(u32::MAX));
        tracks.truncate(Self::MAX_TRACKS);
        tracks
    }
}

/// Bismillah line shown above a surah, if it has one
///
/// Al-Fatihah (1) carries it as its first verse and At-Tawbah (9) has none.
pub fn bismillah(surah_no: u16) -> Option<&'static str> {
    match surah_no {
        1 | 9 => None,
        _ => Some(BISMILLAH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> SurahInfo {
        SurahInfo {
            surah_name: name.to_string(),
            surah_name_arabic: String::new(),
            surah_name_arabic_long: None,
            surah_name_translation: None,
            revelation_place: RevelationPlace::Mecca,
            total_ayah: 7,
        }
    }

    #[test]
    fn test_catalog_numbers_from_one() {
        let catalog = catalog_from_list(vec![info("Al-Faatiha"), info("Al-Baqara")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[&1].info.surah_name, "Al-Faatiha");
        assert_eq!(catalog[&2].number, 2);
    }

    #[test]
    fn test_revelation_place_unknown() {
        let place: RevelationPlace = serde_json::from_str(r#""Taif""#).unwrap();
        assert_eq!(place, RevelationPlace::Unknown);
        assert_eq!(format!("{}", RevelationPlace::Madina), "Madina");
    }

    #[test]
    fn test_translation_parse() {
        assert_eq!(Translation::parse("EN"), Some(Translation::English));
        assert_eq!(Translation::parse("bengali"), Some(Translation::Bengali));
        assert_eq!(Translation::parse("ur"), Some(Translation::Urdu));
        assert_eq!(Translation::parse("fr"), None);
    }

    #[test]
    fn test_bismillah_skips_fatiha_and_tawba() {
        assert!(bismillah(1).is_none());
        assert!(bismillah(9).is_none());
        assert_eq!(bismillah(2), Some(BISMILLAH));
        assert_eq!(bismillah(114), Some(BISMILLAH));
    }

    #[test]
    fn test_surah_arabic_falls_back_to_plain_text() {
        let surah: Surah = serde_json::from_str(
            r#"{
                "surahName": "Al-Ikhlaas",
                "surahNameArabic": "الإخلاص",
                "revelationPlace": "Mecca",
                "totalAyah": 4,
                "arabic2": ["a", "b", "c", "d"],
                "english": ["one", "two", "three", "four"]
            }"#,
        )
        .unwrap();
        assert_eq!(surah.arabic().len(), 4);
        assert_eq!(surah.arabic()[0], "a");
        assert_eq!(surah.translation(Translation::English)[3], "four");
        assert!(surah.translation(Translation::Urdu).is_empty());
    }

    #[test]
    fn test_verse_tracks_capped() {
        let mut audio = BTreeMap::new();
        for id in ["1", "2", "3", "4", "5"] {
            audio.insert(
                id.to_string(),
                AudioTrack {
                    reciter: format!("Reciter {id}"),
                    url: format!("https://audio/{id}.mp3"),
                    original_url: None,
                },
            );
        }
        let verse = Verse {
            info: info("Al-Faatiha"),
            surah_no: 1,
            ayah_no: 1,
            audio,
            arabic1: String::new(),
            arabic2: "plain".to_string(),
            english: "In the name".to_string(),
            bengali: String::new(),
            urdu: String::new(),
        };
        let tracks = verse.audio_tracks();
        assert_eq!(tracks.len(), Verse::MAX_TRACKS);
        assert_eq!(tracks[0].0, "1");
        assert_eq!(verse.arabic(), "plain");
    }

    #[test]
    fn test_verse_tracks_follow_numeric_ids() {
        let audio = ["10", "3", "1", "4", "2"]
            .into_iter()
            .map(|id| {
                let track = AudioTrack {
                    reciter: format!("Reciter {id}"),
                    url: format!("https://audio/{id}.mp3"),
                    original_url: None,
                };
                (id.to_string(), track)
            })
            .collect();
        let verse = Verse {
            info: info("Al-Baqara"),
            surah_no: 2,
            ayah_no: 255,
            audio,
            arabic1: String::new(),
            arabic2: String::new(),
            english: String::new(),
            bengali: String::new(),
            urdu: String::new(),
        };
        let ids: Vec<&str> = verse.audio_tracks().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }
}
