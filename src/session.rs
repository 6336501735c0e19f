//! Analysis session lifecycle.
//!
//! One `AnalysisSession` per active UI session. Transitions are a reducer
//! over [`Event`]s; the I/O that produces a `Response` lives with the
//! caller (the analyze client on native, the frontend's fetch on wasm), so
//! the state machine itself stays synchronous and testable.
//!
//! Every accepted analyze request is tagged with a monotonic sequence
//! number. A response carrying anything but the latest issued seq is
//! discarded, so when a second request supersedes an in-flight one, the
//! latest request always wins regardless of response arrival order.

use log::debug;

use crate::words::{rank_words, RankedWord, WordWeight, DEFAULT_MAX_DISPLAYED};

/// Lifecycle status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Success,
    Error,
}

/// Events the reducer consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user asked to analyze a URL.
    Analyze { url: String },
    /// The collaborator call tagged with `seq` finished.
    Response {
        seq: u64,
        outcome: Result<Vec<WordWeight>, String>,
    },
}

/// Per-session lifecycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSession {
    pub status: Status,
    pub url: String,
    pub words: Vec<RankedWord>,
    pub error: Option<String>,
    max_displayed: usize,
    /// Seq of the latest issued request; responses with older seqs are stale.
    seq: u64,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISPLAYED)
    }
}

impl AnalysisSession {
    pub fn new(max_displayed: usize) -> Self {
        Self {
            status: Status::Idle,
            url: String::new(),
            words: Vec::new(),
            error: None,
            max_displayed,
            seq: 0,
        }
    }

    /// Seq of the latest issued request.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Dispatch an analyze request and return the seq the caller must tag
    /// the collaborator response with. `None` when the URL guard rejected
    /// it (blank URL: no transition, no request).
    pub fn begin_analyze(&mut self, url: &str) -> Option<u64> {
        let before = self.seq;
        self.apply(Event::Analyze {
            url: url.to_string(),
        });
        (self.seq != before).then_some(self.seq)
    }

    /// Apply one event to the session.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Analyze { url } => {
                if url.trim().is_empty() {
                    return;
                }
                self.seq += 1;
                self.url = url;
                self.status = Status::Loading;
                self.error = None;
                debug!("analyze #{} for {}", self.seq, self.url);
            }
            Event::Response { seq, outcome } => {
                if seq != self.seq || self.status != Status::Loading {
                    debug!("dropping stale response #{seq} (latest is #{})", self.seq);
                    return;
                }
                match outcome {
                    Ok(words) => {
                        self.words = rank_words(words, self.max_displayed);
                        self.status = Status::Success;
                        self.error = None;
                    }
                    Err(message) => {
                        // A failed analysis clears the previous words: the
                        // UI falls back to the empty state, not stale data.
                        self.words.clear();
                        self.status = Status::Error;
                        self.error = Some(message);
                    }
                }
            }
        }
    }
}
