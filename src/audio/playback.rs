//! "Currently playing" state toggled by user actions

/// Result of toggling a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The URL was loaded and playback started from its beginning
    Started(String),
    /// The URL was playing and is now paused
    Paused(String),
}

/// Which URL is loaded and whether it is playing
///
/// Pausing keeps the URL loaded; toggling it again restarts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    current_url: Option<String>,
    playing: bool,
}

impl PlaybackState {
    pub fn toggle(&mut self, url: &str) -> Transition {
        if self.is_playing(url) {
            self.playing = false;
            Transition::Paused(url.to_string())
        } else {
            self.current_url = Some(url.to_string());
            self.playing = true;
            Transition::Started(url.to_string())
        }
    }

    /// The loaded URL played to its end
    pub fn ended(&mut self) {
        self.playing = false;
        self.current_url = None;
    }

    pub fn is_playing(&self, url: &str) -> bool {
        self.playing && self.current_url.as_deref() == Some(url)
    }

    pub fn is_active(&self) -> bool {
        self.playing
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }
}
