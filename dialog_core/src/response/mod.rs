//! Response model - the value a successful selection hands back.

use serde::{Deserialize, Serialize};

use script_rules::ActorId;

/// Outcome of executing an actor, tagged by variant kind.
///
/// A turn where nothing is eligible to say is represented by the absence of
/// a response, not by an error. Only the literal text is guaranteed across
/// variants; everything else is variant-specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorResponse {
    /// A reply utterance chosen by a say actor.
    Say { actor: ActorId, text: String },
}

impl ActorResponse {
    /// The literal text to emit to the user.
    pub fn response_text(&self) -> &str {
        match self {
            ActorResponse::Say { text, .. } => text,
        }
    }

    /// Identifier of the actor that produced this response.
    pub fn actor(&self) -> ActorId {
        match self {
            ActorResponse::Say { actor, .. } => *actor,
        }
    }
}

impl std::fmt::Display for ActorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorResponse::Say { text, .. } => write!(f, "say «{}»", text),
        }
    }
}
