//! Best-effort pronunciation playback.
//!
//! The renderer only reports which audio source belongs to an entry; playing it
//! goes through an [`AudioBackend`] so callers decide how sound is produced.

use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Player used by [`CommandBackend::from_env`] when none is configured.
pub const DEFAULT_PLAYER: &str = "ffplay -nodisp -autoexit -loglevel quiet";

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio player configured")]
    NoPlayer,

    #[error("failed to start audio player: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Something that can play an audio resource by URL.
pub trait AudioBackend: Send + Sync {
    /// Reset playback of `src` to its start.
    fn rewind(&self, src: &str);

    fn play(&self, src: &str) -> Result<(), AudioError>;
}

/// The play control attached to a rendered entry.
#[derive(Clone)]
pub struct AudioControl {
    src: String,
    backend: Arc<dyn AudioBackend>,
}

impl AudioControl {
    pub fn new(src: impl Into<String>, backend: Arc<dyn AudioBackend>) -> Self {
        Self {
            src: src.into(),
            backend,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Play from the start. Failures are logged and otherwise ignored.
    pub fn play(&self) {
        self.backend.rewind(&self.src);
        if let Err(e) = self.backend.play(&self.src) {
            tracing::debug!("Audio playback of {} failed: {}", self.src, e);
        }
    }
}

impl std::fmt::Debug for AudioControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioControl").field("src", &self.src).finish()
    }
}

/// Plays audio by launching an external player with the source URL appended
/// to its arguments.
///
/// Each start spawns a fresh process, so rewinding stops whatever is still
/// playing.
#[derive(Debug)]
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
    current: Mutex<Option<Child>>,
}

impl CommandBackend {
    /// Parse a whitespace-separated command line such as `mpv --no-video`.
    pub fn new(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        Self {
            program: parts.next().unwrap_or_default(),
            args: parts.collect(),
            current: Mutex::new(None),
        }
    }

    /// Use `WORDLOOKUP_AUDIO_PLAYER`, falling back to [`DEFAULT_PLAYER`].
    pub fn from_env() -> Self {
        let command_line = std::env::var("WORDLOOKUP_AUDIO_PLAYER")
            .unwrap_or_else(|_| DEFAULT_PLAYER.to_string());
        Self::new(&command_line)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Block until the most recently started playback exits.
    pub fn wait(&self) {
        let child = self.current.lock().ok().and_then(|mut c| c.take());
        if let Some(mut child) = child {
            let _ = child.wait();
        }
    }
}

impl AudioBackend for CommandBackend {
    fn rewind(&self, _src: &str) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(mut child) = current.take() {
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }

    fn play(&self, src: &str) -> Result<(), AudioError> {
        if self.program.is_empty() {
            return Err(AudioError::NoPlayer);
        }
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(src)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Ok(mut current) = self.current.lock() {
            *current = Some(child);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingBackend {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl AudioBackend for RecordingBackend {
        fn rewind(&self, src: &str) {
            self.calls.lock().unwrap().push(format!("rewind {}", src));
        }

        fn play(&self, src: &str) -> Result<(), AudioError> {
            self.calls.lock().unwrap().push(format!("play {}", src));
            if self.fail {
                Err(AudioError::NoPlayer)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn play_rewinds_before_every_start() {
        let backend = Arc::new(RecordingBackend::default());
        let control = AudioControl::new("a.mp3", backend.clone());

        control.play();
        control.play();

        assert_eq!(
            *backend.calls.lock().unwrap(),
            vec!["rewind a.mp3", "play a.mp3", "rewind a.mp3", "play a.mp3"]
        );
    }

    #[test]
    fn play_suppresses_backend_failures() {
        let backend = Arc::new(RecordingBackend {
            fail: true,
            ..Default::default()
        });
        let control = AudioControl::new("a.mp3", backend.clone());

        control.play();

        assert_eq!(backend.calls.lock().unwrap().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn command_backend_rewind_stops_running_playback() {
        let backend = CommandBackend::new("sleep");
        backend.play("5").unwrap();
        assert!(backend.current.lock().unwrap().is_some());

        backend.rewind("5");

        assert!(backend.current.lock().unwrap().is_none());
    }

    #[test]
    fn command_backend_splits_command_line() {
        let backend = CommandBackend::new("mpv --no-video  --really-quiet");
        assert_eq!(backend.program(), "mpv");
        assert_eq!(backend.args(), ["--no-video", "--really-quiet"]);
    }

    #[test]
    fn command_backend_without_program_reports_no_player() {
        let backend = CommandBackend::new("   ");
        assert!(matches!(backend.play("a.mp3"), Err(AudioError::NoPlayer)));
    }

    #[test]
    fn command_backend_reports_missing_program() {
        let backend = CommandBackend::new("wordlookup-no-such-player-binary");
        assert!(matches!(backend.play("a.mp3"), Err(AudioError::Spawn(_))));
    }
}
