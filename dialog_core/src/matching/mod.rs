//! Match context - what the rule matcher hands to the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot bindings produced by the external rule matcher.
///
/// The engine itself only forwards this to the slot substitution step; it
/// never inspects individual bindings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchContext {
    /// Named slot values captured by the matched rule.
    pub slots: HashMap<String, String>,

    /// Additional matcher payload in a flexible map.
    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl MatchContext {
    /// Create an empty match context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a slot value.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// Look up a slot binding.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }
}
