//! Audio outputs that actually produce sound

use std::io;
use std::process::{Child, Command, Stdio};

use super::AudioError;

/// Something that can play one URL at a time
pub trait AudioOutput {
    /// Begin playing `url` from the start
    fn start(&mut self, url: &str) -> Result<(), AudioError>;

    /// Stop whatever is playing; a no-op when idle
    fn stop(&mut self) -> Result<(), AudioError>;

    /// Whether the last started URL has stopped on its own
    fn is_finished(&mut self) -> Result<bool, AudioError>;
}

/// Plays audio by running an external player with the URL as last argument
#[derive(Debug)]
pub struct CommandOutput {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl CommandOutput {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            child: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl AudioOutput for CommandOutput {
    fn start(&mut self, url: &str) -> Result<(), AudioError> {
        self.stop()?;

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AudioError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        tracing::debug!(program = %self.program, pid = child.id(), "player started");
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AudioError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        match child.kill() {
            Ok(()) => {}
            // Already exited
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => {}
            Err(e) => {
                tracing::warn!(pid = child.id(), "failed to stop player: {e}");
                return Err(AudioError::Io(e));
            }
        }
        child.wait()?;
        Ok(())
    }

    fn is_finished(&mut self) -> Result<bool, AudioError> {
        let Some(child) = self.child.as_mut() else {
            return Ok(true);
        };

        match child.try_wait()? {
            Some(status) => {
                tracing::debug!(%status, "player exited");
                self.child = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Drop for CommandOutput {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::warn!("player still running on exit: {e}");
        }
    }
}
