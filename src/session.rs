//! Interactive explorer state: which view is shown, what is loaded, what is playing

use thiserror::Error;
use url::Url;

use crate::audio::{AudioError, AudioOutput, Player, Transition};
use crate::quran::reciter;
use crate::quran::{
    self, filter_surahs, Catalog, Category, QuranSource, Reciter, Surah, SurahFilter,
    SurahSummary, Translation, Verse, JUZ_COUNT,
};

/// Screen the explorer is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Surah,
    Verse,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] quran::Error),

    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error("no surah is open")]
    NoSurah,

    #[error("no verse is open")]
    NoVerse,

    #[error("surah {surah} has {total} verses; there is no verse {ayah}")]
    VerseOutOfRange { surah: u16, ayah: u32, total: u32 },

    #[error("juz {0} is out of range (1-{max})", max = JUZ_COUNT)]
    InvalidJuz(u8),

    #[error("unknown reciter '{0}'")]
    UnknownReciter(String),

    #[error("reciter {0} has no full-surah recording for this surah")]
    NoSurahAudio(String),

    #[error("this verse has no recording #{0}")]
    NoTrack(usize),

    #[error("invalid audio URL: {0}")]
    AudioUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Explorer state over a data source and an audio output
pub struct Session<S, O: AudioOutput> {
    source: S,
    player: Player<O>,
    audio_base: Url,
    catalog: Catalog,
    filter: SurahFilter,
    reciter: &'static Reciter,
    translation: Translation,
    view: View,
    surah: Option<Surah>,
    verse: Option<Verse>,
}

impl<S: QuranSource, O: AudioOutput> Session<S, O> {
    /// Fetch the catalog and start on the home view
    pub fn load(
        source: S,
        output: O,
        audio_base: Url,
        reciter: &str,
        translation: Translation,
    ) -> Result<Self> {
        let reciter = Reciter::find(reciter)
            .ok_or_else(|| SessionError::UnknownReciter(reciter.to_string()))?;
        let catalog = source.list_surahs()?;
        tracing::debug!(surahs = catalog.len(), "catalog loaded");

        Ok(Self {
            source,
            player: Player::new(output),
            audio_base,
            catalog,
            filter: SurahFilter::default(),
            reciter,
            translation,
            view: View::Home,
            surah: None,
            verse: None,
        })
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &SurahFilter {
        &self.filter
    }

    pub fn reciter(&self) -> &'static Reciter {
        self.reciter
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    pub fn surah(&self) -> Option<&Surah> {
        self.surah.as_ref()
    }

    pub fn verse(&self) -> Option<&Verse> {
        self.verse.as_ref()
    }

    pub fn player(&self) -> &Player<O> {
        &self.player
    }

    /// Surahs passing the current filter
    pub fn visible_surahs(&self) -> Vec<&SurahSummary> {
        filter_surahs(&self.catalog, &self.filter)
    }

    pub fn go_home(&mut self) {
        self.view = View::Home;
        self.surah = None;
        self.verse = None;
    }

    pub fn open_surah(&mut self, surah_no: u16) -> Result<&Surah> {
        let surah = self.source.get_surah(surah_no)?;
        tracing::debug!(surah = surah_no, verses = surah.info.total_ayah, "surah opened");
        self.view = View::Surah;
        self.verse = None;
        Ok(self.surah.insert(surah))
    }

    pub fn open_verse(&mut self, ayah_no: u32) -> Result<&Verse> {
        let surah = self.surah.as_ref().ok_or(SessionError::NoSurah)?;
        check_ayah(surah, ayah_no)?;
        let verse = self.source.get_verse(surah.surah_no, ayah_no)?;
        tracing::debug!(surah = surah.surah_no, ayah = ayah_no, "verse opened");
        self.view = View::Verse;
        Ok(self.verse.insert(verse))
    }

    /// Leave the verse view for the surah it belongs to
    pub fn back_to_surah(&mut self) -> Result<()> {
        if self.view != View::Verse {
            return Err(SessionError::NoVerse);
        }
        self.view = View::Surah;
        self.verse = None;
        Ok(())
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.trim().to_string();
    }

    pub fn set_category(&mut self, category: Category) {
        self.filter.category = category;
    }

    /// Select a juz and switch the category to it
    pub fn set_juz(&mut self, juz: u8) -> Result<()> {
        if !(1..=JUZ_COUNT).contains(&juz) {
            return Err(SessionError::InvalidJuz(juz));
        }
        self.filter.juz = juz;
        self.filter.category = Category::Juz;
        Ok(())
    }

    pub fn set_reciter(&mut self, id: &str) -> Result<&'static Reciter> {
        let reciter =
            Reciter::find(id).ok_or_else(|| SessionError::UnknownReciter(id.to_string()))?;
        self.reciter = reciter;
        Ok(reciter)
    }

    pub fn set_translation(&mut self, translation: Translation) {
        self.translation = translation;
    }

    /// Toggle the full recitation of the open surah
    pub fn play_surah(&mut self) -> Result<Transition> {
        let surah = self.surah.as_ref().ok_or(SessionError::NoSurah)?;
        let track = surah
            .audio_for(self.reciter.id)
            .ok_or_else(|| SessionError::NoSurahAudio(self.reciter.id.to_string()))?;
        let url = track.url.clone();
        Ok(self.player.toggle(&url)?)
    }

    /// URL of one verse of the open surah for the current reciter
    pub fn verse_audio_url(&self, ayah_no: u32) -> Result<Url> {
        let surah = self.surah.as_ref().ok_or(SessionError::NoSurah)?;
        check_ayah(surah, ayah_no)?;
        Ok(reciter::verse_audio_url(
            &self.audio_base,
            self.reciter.id,
            surah.surah_no,
            ayah_no,
        )?)
    }

    /// Toggle one verse of the open surah
    pub fn play_verse(&mut self, ayah_no: u32) -> Result<Transition> {
        let url = self.verse_audio_url(ayah_no)?;
        Ok(self.player.toggle(url.as_str())?)
    }

    /// Toggle the `index`-th (1-based) recording listed for the open verse
    pub fn play_track(&mut self, index: usize) -> Result<Transition> {
        let verse = self.verse.as_ref().ok_or(SessionError::NoVerse)?;
        let url = verse
            .audio_tracks()
            .get(index.wrapping_sub(1))
            .map(|(_, track)| track.url.clone())
            .ok_or(SessionError::NoTrack(index))?;
        Ok(self.player.toggle(&url)?)
    }

    pub fn stop(&mut self) -> Result<()> {
        Ok(self.player.stop()?)
    }

    /// Returns true when playback finished since the last tick
    pub fn tick(&mut self) -> Result<bool> {
        Ok(self.player.poll()?)
    }
}

fn check_ayah(surah: &Surah, ayah_no: u32) -> Result<()> {
    if ayah_no == 0 || ayah_no > surah.info.total_ayah {
        return Err(SessionError::VerseOutOfRange {
            surah: surah.surah_no,
            ayah: ayah_no,
            total: surah.info.total_ayah,
        });
    }
    Ok(())
}
