//! Audio playback of recitations
//!
//! [`PlaybackState`] tracks which URL is loaded; [`Player`] keeps that state
//! in step with an [`AudioOutput`].

pub mod output;
pub mod playback;

pub use output::{AudioOutput, CommandOutput};
pub use playback::{PlaybackState, Transition};

use std::io;
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to start audio player '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("audio player I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Playback state bound to an output
#[derive(Debug)]
pub struct Player<O: AudioOutput> {
    state: PlaybackState,
    output: O,
}

impl<O: AudioOutput> Player<O> {
    pub fn new(output: O) -> Self {
        Self {
            state: PlaybackState::default(),
            output,
        }
    }

    /// Play `url`, or pause it if it is the one playing
    pub fn toggle(&mut self, url: &str) -> Result<Transition, AudioError> {
        // Both transitions silence the output; state only moves once that worked.
        self.output.stop()?;
        let transition = self.state.toggle(url);
        match &transition {
            Transition::Started(url) => {
                if let Err(e) = self.output.start(url) {
                    self.state.ended();
                    return Err(e);
                }
                tracing::info!(url = %url, "playing");
            }
            Transition::Paused(url) => tracing::info!(url = %url, "paused"),
        }
        Ok(transition)
    }

    pub fn stop(&mut self) -> Result<(), AudioError> {
        self.output.stop()?;
        self.state.ended();
        Ok(())
    }

    /// Returns true when playback ended since the last poll
    pub fn poll(&mut self) -> Result<bool, AudioError> {
        if self.state.is_active() && self.output.is_finished()? {
            tracing::debug!(url = ?self.state.current_url(), "playback ended");
            self.state.ended();
            return Ok(true);
        }
        Ok(false)
    }

    pub fn wait_until_finished(&mut self, interval: Duration) -> Result<(), AudioError> {
        while self.state.is_active() {
            if self.poll()? {
                break;
            }
            thread::sleep(interval);
        }
        Ok(())
    }

    pub fn is_playing(&self, url: &str) -> bool {
        self.state.is_playing(url)
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
