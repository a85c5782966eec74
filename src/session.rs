//! A single lookup view: input, status line, and rendered output.
//!
//! Submitting runs normalize → look up → classify → render, and persists the
//! word after a successful lookup. [`LookupSession::bootstrap`] replays the
//! persisted word through the same path.

use std::sync::Arc;

use crate::audio::{AudioBackend, AudioControl};
use crate::lookup::{Dictionary, Query};
use crate::models::LookupOutcome;
use crate::render::{render, RenderedView};
use crate::store::{WordStore, LAST_WORD_KEY};

/// Status line shown while a lookup is in flight.
pub const LOADING_STATUS: &str = "Looking up…";

/// Everything the page shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Contents of the word input.
    pub input: String,
    /// Transient status line, `None` when cleared.
    pub status: Option<String>,
    /// Latest outcome, `None` before the first submission.
    pub outcome: Option<LookupOutcome>,
    pub view: RenderedView,
}

/// A lookup that has started but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    query: Query,
    token: u64,
}

impl Submission {
    pub fn query(&self) -> &Query {
        &self.query
    }
}

pub struct LookupSession<D, S> {
    dictionary: D,
    store: S,
    audio: Option<Arc<dyn AudioBackend>>,
    state: ViewState,
    generation: u64,
}

impl<D: Dictionary, S: WordStore> LookupSession<D, S> {
    pub fn new(dictionary: D, store: S) -> Self {
        Self {
            dictionary,
            store,
            audio: None,
            state: ViewState::default(),
            generation: 0,
        }
    }

    /// Attach a playback backend for [`LookupSession::audio_control`].
    pub fn with_audio(mut self, backend: Arc<dyn AudioBackend>) -> Self {
        self.audio = Some(backend);
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
    }

    /// Start a submission of the current input.
    ///
    /// Returns `None` and leaves the view untouched when the input is blank.
    /// Otherwise clears the output and shows the loading status before any
    /// network activity.
    pub fn begin(&mut self) -> Option<Submission> {
        let query = Query::parse(&self.state.input)?;

        self.generation += 1;
        self.state.view = RenderedView::default();
        self.state.status = Some(LOADING_STATUS.to_string());
        self.state.outcome = Some(LookupOutcome::Loading);

        Some(Submission {
            query,
            token: self.generation,
        })
    }

    /// Apply the outcome of `submission`.
    ///
    /// Outcomes of submissions superseded by a later [`LookupSession::begin`]
    /// are dropped; returns whether the view was updated.
    pub fn complete(&mut self, submission: Submission, outcome: LookupOutcome) -> bool {
        if submission.token != self.generation {
            tracing::debug!(
                "Discarding stale outcome for {:?}",
                submission.query.as_str()
            );
            return false;
        }

        self.state.status = None;
        self.state.view = render(&outcome);

        if outcome.is_success() {
            if let Err(e) = self.store.set(LAST_WORD_KEY, submission.query.as_str()) {
                tracing::warn!("Failed to persist last word: {}", e);
            }
        }

        self.state.outcome = Some(outcome);
        true
    }

    /// Submit the current input. Returns whether a lookup ran.
    pub async fn submit(&mut self) -> bool {
        let Some(submission) = self.begin() else {
            return false;
        };
        let outcome = self.dictionary.lookup(submission.query()).await;
        self.complete(submission, outcome)
    }

    /// Restore the persisted word, if any, and submit it.
    pub async fn bootstrap(&mut self) -> bool {
        let word = match self.store.get(LAST_WORD_KEY) {
            Ok(Some(word)) if !word.is_empty() => word,
            Ok(_) => return false,
            Err(e) => {
                tracing::warn!("Failed to read last word: {}", e);
                return false;
            }
        };

        tracing::debug!("Restoring last word {:?}", word);
        self.set_input(word);
        self.submit().await
    }

    /// Play control for the rendered entry, when it has audio and a backend
    /// is attached.
    pub fn audio_control(&self) -> Option<AudioControl> {
        let src = self.state.view.audio_src.as_ref()?;
        let backend = self.audio.clone()?;
        Some(AudioControl::new(src.clone(), backend))
    }
}
