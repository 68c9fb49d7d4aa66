//! # Dialog Core
//!
//! The per-turn engine of the dialogue agent. Given an actor matched by an
//! external rule matcher, this crate decides which literal utterance (if any)
//! the agent produces next.
//!
//! ## Core Components
//!
//! - **session**: Per-conversation memory of actor visits and said phrases
//! - **response_selector**: Phrase selection and repeat handling
//! - **matching**: Slot bindings produced by the rule matcher
//! - **response**: The value handed back to whatever drives the turn
//!
//! ## Design Philosophy
//!
//! - **Stateless rules, stateful sessions**: Actors are shared read-only;
//!   every mutable counter lives in the session
//! - **Silence is an outcome**: A turn with nothing eligible to say returns
//!   no response, never an error
//! - **Injected randomness**: Variety between equally eligible phrases comes
//!   from a caller-supplied generator, so tests can seed it

pub mod matching;
pub mod response;
pub mod response_selector;
pub mod session;

pub use matching::*;
pub use response::*;
pub use response_selector::*;
pub use session::*;
