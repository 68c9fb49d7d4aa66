//! Text utilities shared by the loader and the runtime engine.

/// Text normalization collaborator.
///
/// The engine accounts for already-said phrases by normalized text, so the
/// same utterance with different casing or spacing counts as one phrase.
/// Implementations must be pure: equal inputs produce equal outputs.
pub trait TextUtils {
    /// Canonical key form of an utterance.
    fn normalize(&self, text: &str) -> String;
}

/// Plain normalization: trim, collapse inner whitespace, lowercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextUtils;

impl TextUtils for PlainTextUtils {
    fn normalize(&self, text: &str) -> String {
        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
