//! List command - Show surahs, optionally searched and filtered

use anyhow::{Context, Result};

use quran_explorer::config::Config;
use quran_explorer::quran::{filter_surahs, Catalog, Category, QuranSource, SurahFilter};

use super::{render, utils};

/// Options for the list command
pub struct ListOptions {
    /// Text matched against names and numbers
    pub search: Option<String>,
    /// Category: all, mecca, medina, juz
    pub filter: String,
    /// Juz to show when filtering by juz
    pub juz: u8,
    /// Limit number of results
    pub limit: Option<usize>,
}

impl ListOptions {
    fn to_filter(&self) -> Result<SurahFilter> {
        let category = Category::parse(&self.filter).with_context(|| {
            format!(
                "Invalid filter '{}'. Use all, mecca, medina or juz",
                self.filter
            )
        })?;
        Ok(SurahFilter {
            query: self.search.clone().unwrap_or_default(),
            category,
            juz: self.juz,
        })
    }
}

/// Execute the list command and return formatted output
pub fn execute(config: &Config, options: ListOptions) -> Result<String> {
    let filter = options.to_filter()?;
    let client = utils::client(config)?;
    let catalog = client
        .list_surahs()
        .context("Failed to fetch the surah list")?;

    Ok(format_list(&catalog, &filter, options.limit))
}

/// Render the filtered catalog with a footer line
pub fn format_list(catalog: &Catalog, filter: &SurahFilter, limit: Option<usize>) -> String {
    let mut surahs = filter_surahs(catalog, filter);

    if surahs.is_empty() {
        return format!("No surahs found matching \"{}\"", filter.query);
    }

    let total_count = surahs.len();
    if let Some(n) = limit {
        surahs.truncate(n);
    }

    let mut output = render::surah_table(&surahs).to_string();
    output.push_str("\n\n");
    if surahs.len() < total_count {
        output.push_str(&format!(
            "Showing {} of {} surahs",
            surahs.len(),
            total_count
        ));
    } else if let Some(summary) = filter.summary(total_count) {
        output.push_str(&summary);
    } else {
        output.push_str(&format!("{} surahs found", total_count));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use quran_explorer::quran::types::catalog_from_list;
    use quran_explorer::quran::{RevelationPlace, SurahInfo};

    fn catalog() -> Catalog {
        let info = |name: &str, place| SurahInfo {
            surah_name: name.to_string(),
            surah_name_arabic: String::new(),
            surah_name_arabic_long: None,
            surah_name_translation: None,
            revelation_place: place,
            total_ayah: 10,
        };
        catalog_from_list(vec![
            info("Al-Faatiha", RevelationPlace::Mecca),
            info("Al-Baqara", RevelationPlace::Madina),
            info("Aal-i-Imraan", RevelationPlace::Madina),
        ])
    }

    fn options(filter: &str) -> ListOptions {
        ListOptions {
            search: None,
            filter: filter.to_string(),
            juz: 1,
            limit: None,
        }
    }

    #[test]
    fn test_invalid_filter_rejected() {
        assert!(options("makkiyya").to_filter().is_err());
        assert_eq!(
            options("Medinan").to_filter().unwrap().category,
            Category::Medina
        );
    }

    #[test]
    fn test_format_list_counts() {
        let output = format_list(&catalog(), &SurahFilter::default(), None);
        assert!(output.ends_with("3 surahs found"));
    }

    #[test]
    fn test_format_list_category_summary() {
        let filter = options("medina").to_filter().unwrap();
        let output = format_list(&catalog(), &filter, None);
        assert!(output.ends_with("Showing 2 Medinan surahs"));
        assert!(!output.contains("Al-Faatiha"));
    }

    #[test]
    fn test_format_list_limit() {
        let output = format_list(&catalog(), &SurahFilter::default(), Some(1));
        assert!(output.ends_with("Showing 1 of 3 surahs"));
        assert!(!output.contains("Al-Baqara"));
    }

    #[test]
    fn test_format_list_no_results() {
        let filter = SurahFilter {
            query: "zzz".to_string(),
            ..Default::default()
        };
        assert_eq!(
            format_list(&catalog(), &filter, None),
            "No surahs found matching \"zzz\""
        );
    }
}
