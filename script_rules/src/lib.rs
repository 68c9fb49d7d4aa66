//! # Script Rules
//!
//! The "Scenario Book" crate - contains the scripted dialogue actors, their
//! declarative loader, and the constants/text collaborators shared with the
//! runtime. This crate is the single source of truth for what an actor *may*
//! say and holds no per-conversation state.

pub mod actors;
pub mod constants;
pub mod loader;
pub mod text;

pub use actors::*;
pub use constants::*;
pub use loader::*;
pub use text::*;
