//! Actor definitions - the executable dialogue actions of the scenario book.

mod say;

pub use say::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for loaded actors.
///
/// Assigned once when the actor is built from its configuration node. All
/// session counters are keyed by this identifier, so two structurally
/// identical actors are tracked independently and serialized session state
/// stays meaningful across process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Create a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an actor ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty actor ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A loaded dialogue action, tagged by variant kind.
///
/// Built once per configuration load and shared read-only by every session
/// afterwards. Today the only concrete variant is [`SayActor`]; the `rewrite`
/// scripting keyword loads the same variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Actor {
    Say(SayActor),
}

impl Actor {
    /// Identifier assigned at load time.
    pub fn id(&self) -> ActorId {
        match self {
            Actor::Say(say) => say.id,
        }
    }

    /// The scripting keyword this actor was declared with.
    pub fn keyword(&self) -> &str {
        match self {
            Actor::Say(say) => &say.keyword,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Say(say) => write!(f, "{}", say),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id_uniqueness() {
        let a = ActorId::new();
        let b = ActorId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_actor_accessors() {
        let actor = Actor::Say(SayActor::new("say").with_phrases(["Это кот."]));
        assert_eq!(actor.keyword(), "say");
        assert_ne!(actor.id(), ActorId::nil());
    }

    #[test]
    fn test_actor_display() {
        let actor = Actor::Say(
            SayActor::new("say").with_phrases(["Привет!", "Здравствуйте!"]),
        );
        assert_eq!(actor.to_string(), "say \"Привет! | Здравствуйте!\"");
    }
}
