//! Named constants referenced from scenario templates.
//!
//! Authors may write `$botname` inside any template literal; the loader
//! resolves such references against the constants table before the actor is
//! stored. References that match no constant are left intact - at runtime
//! they are slot references for the substitution machinery.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::text::TextUtils;

/// Table of named constants available to scenario templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptConstants {
    values: HashMap<String, String>,
}

impl ScriptConstants {
    /// Create an empty constants table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or overwrite a constant.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a constant by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of defined constants.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ScriptConstants {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Rewrite `$name` references in a template literal from the constants table.
///
/// Called once per literal at load time. Pure transform: references with no
/// matching constant are copied through unchanged. The text utilities are
/// part of the collaborator signature and reserved for substitution engines
/// that need normalization.
pub fn replace_constants(
    text: &str,
    constants: &ScriptConstants,
    _text_utils: &dyn TextUtils,
) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((index, ch)) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        let rest = &text[index + ch.len_utf8()..];
        let name_len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        let name = &rest[..name_len];

        match constants.get(name) {
            Some(value) if !name.is_empty() => {
                result.push_str(value);
                for _ in 0..name.chars().count() {
                    chars.next();
                }
            }
            _ => result.push(ch),
        }
    }

    result
}
