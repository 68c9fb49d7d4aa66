//! Session state - per-conversation memory the engine reads and mutates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use script_rules::{ActorId, TextUtils};

/// Per-conversation counters consulted by the selection algorithm.
///
/// Phrase counters are keyed by normalized text (see
/// [`TextUtils::normalize`]); the selector normalizes before querying, and
/// callers record uttered phrases through [`Session::note_utterance`]. Both
/// counters are monotonically non-decreasing for the lifetime of a session.
pub trait Session {
    /// Record that an actor has been selected for evaluation this turn.
    fn register_visit(&mut self, actor: ActorId);

    /// How many times the actor has been visited in this session.
    fn hit_count(&self, actor: ActorId) -> u32;

    /// How many times the agent has uttered the given normalized text.
    fn phrase_count(&self, normalized: &str) -> u32;

    /// Record one utterance of the given normalized text.
    fn record_phrase(&mut self, normalized: String);

    /// Record an utterance by raw text, normalizing it first.
    fn note_utterance(&mut self, text_utils: &dyn TextUtils, text: &str) {
        self.record_phrase(text_utils.normalize(text));
    }
}

/// In-memory session state.
///
/// The surrounding dialogue manager owns creation and destruction; the serde
/// derives let it persist a session between turns if it wants to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogSession {
    actor_hits: HashMap<ActorId, u32>,
    phrase_counts: HashMap<String, u32>,
}

impl DialogSession {
    /// Create a fresh session with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Actors visited at least once, in no particular order.
    pub fn visited_actors(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.actor_hits.keys().copied()
    }

    /// Distinct normalized phrases uttered so far.
    pub fn said_phrase_count(&self) -> usize {
        self.phrase_counts.len()
    }
}

impl Session for DialogSession {
    fn register_visit(&mut self, actor: ActorId) {
        *self.actor_hits.entry(actor).or_insert(0) += 1;
    }

    fn hit_count(&self, actor: ActorId) -> u32 {
        self.actor_hits.get(&actor).copied().unwrap_or(0)
    }

    fn phrase_count(&self, normalized: &str) -> u32 {
        self.phrase_counts.get(normalized).copied().unwrap_or(0)
    }

    fn record_phrase(&mut self, normalized: String) {
        *self.phrase_counts.entry(normalized).or_insert(0) += 1;
    }
}
