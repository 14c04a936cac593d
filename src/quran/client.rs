//! Typed client for the quranapi.pages.dev JSON API
//!
//! | Call | Path (relative to base URL) |
//! |------|-----------------------------|
//! | list chapters | `surah.json` |
//! | get chapter   | `{surah}.json` |
//! | get verse     | `{surah}/{ayah}.json` |

use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::error::{Error, Result};
use super::types::{catalog_from_list, Catalog, Surah, SurahInfo, Verse, SURAH_COUNT};

const USER_AGENT: &str = concat!("quran-explorer/", env!("CARGO_PKG_VERSION"));

/// Source of surah and verse data
pub trait QuranSource {
    /// All surahs, numbered from 1
    fn list_surahs(&self) -> Result<Catalog>;

    fn get_surah(&self, surah_no: u16) -> Result<Surah>;

    fn get_verse(&self, surah_no: u16, ayah_no: u32) -> Result<Verse>;
}

/// Blocking HTTP client for the Quran API
#[derive(Debug, Clone)]
pub struct QuranClient {
    http: reqwest::blocking::Client,
    base_url: Url,
}

impl QuranClient {
    /// `base_url` should end with `/` so endpoint paths join beneath it
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).map_err(|source| Error::Url {
            path: path.to_string(),
            source,
        })?;

        tracing::debug!(url = %url, "GET");

        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|source| Error::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| Error::Http {
            url: url.to_string(),
            source,
        })?;

        tracing::trace!(url = %url, bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn check_surah(surah_no: u16) -> Result<()> {
    if (1..=SURAH_COUNT).contains(&surah_no) {
        Ok(())
    } else {
        Err(Error::InvalidSurah(surah_no))
    }
}

impl QuranSource for QuranClient {
    fn list_surahs(&self) -> Result<Catalog> {
        let list: Vec<SurahInfo> = self.get_json("surah.json")?;
        Ok(catalog_from_list(list))
    }

    fn get_surah(&self, surah_no: u16) -> Result<Surah> {
        check_surah(surah_no)?;
        let mut surah: Surah = self.get_json(&format!("{}.json", surah_no))?;
        surah.surah_no = surah_no;
        Ok(surah)
    }

    fn get_verse(&self, surah_no: u16, ayah_no: u32) -> Result<Verse> {
        check_surah(surah_no)?;
        if ayah_no == 0 {
            return Err(Error::InvalidVerse {
                surah: surah_no,
                ayah: ayah_no,
            });
        }
        let mut verse: Verse = self.get_json(&format!("{}/{}.json", surah_no, ayah_no))?;
        verse.surah_no = surah_no;
        Ok(verse)
    }
}
