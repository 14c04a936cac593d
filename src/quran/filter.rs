//! Search and category filtering over the surah catalog

use super::juz;
use super::types::{Catalog, RevelationPlace, SurahSummary};

/// Category a surah list can be narrowed to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Mecca,
    Medina,
    Juz,
}

impl Category {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "mecca" | "meccan" | "makkah" => Some(Self::Mecca),
            "medina" | "medinan" | "madina" => Some(Self::Medina),
            "juz" => Some(Self::Juz),
            _ => None,
        }
    }
}

/// Search text plus category restriction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahFilter {
    /// Matched against the transliterated name, the Arabic name and the number
    pub query: String,
    pub category: Category,
    /// Only consulted when `category` is [`Category::Juz`]
    pub juz: u8,
}

impl Default for SurahFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: Category::All,
            juz: 1,
        }
    }
}

impl SurahFilter {
    pub fn matches(&self, surah: &SurahSummary) -> bool {
        self.matches_query(surah) && self.matches_category(surah)
    }

    fn matches_query(&self, surah: &SurahSummary) -> bool {
        if self.query.is_empty() {
            return true;
        }
        // The Arabic name is compared as typed; case folding only applies to Latin text
        surah
            .info
            .surah_name
            .to_lowercase()
            .contains(&self.query.to_lowercase())
            || surah.info.surah_name_arabic.contains(&self.query)
            || surah.number.to_string().contains(&self.query)
    }

    fn matches_category(&self, surah: &SurahSummary) -> bool {
        match self.category {
            Category::All => true,
            Category::Mecca => surah.info.revelation_place == RevelationPlace::Mecca,
            Category::Medina => surah.info.revelation_place == RevelationPlace::Madina,
            Category::Juz => juz::surahs_in_juz(self.juz)
                .is_some_and(|surahs| surahs.contains(&surah.number)),
        }
    }

    /// Line describing an active category restriction
    pub fn summary(&self, count: usize) -> Option<String> {
        match self.category {
            Category::All => None,
            Category::Mecca => Some(format!("Showing {} Meccan surahs", count)),
            Category::Medina => Some(format!("Showing {} Medinan surahs", count)),
            Category::Juz => Some(format!("Showing {} surahs in Juz {}", count, self.juz)),
        }
    }
}

/// Surahs matching a filter, in catalog order
pub fn filter_surahs<'a>(catalog: &'a Catalog, filter: &SurahFilter) -> Vec<&'a SurahSummary> {
    catalog.values().filter(|s| filter.matches(s)).collect()
}
