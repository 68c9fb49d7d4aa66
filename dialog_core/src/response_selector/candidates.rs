//! Candidate materialization - turning pool templates into utterable text.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::matching::MatchContext;
use script_rules::TextUtils;

/// Literal marker of an unresolved slot reference.
pub const SLOT_MARKER: char = '$';

/// Fill slot references in a template from the match context.
///
/// Named extension point for the slot substitution engine. Until the matcher
/// exports its bindings this returns the template unchanged, and templates
/// that keep their marker are excluded downstream.
pub fn prepare_for_saying(
    template: &str,
    _matching: &MatchContext,
    _text_utils: &dyn TextUtils,
) -> String {
    // TODO: resolve $slot references from MatchContext::slots once the
    // matcher exports its bindings.
    template.to_string()
}

/// Whether the text still carries an unresolved slot reference.
pub fn has_unresolved_slot(text: &str) -> bool {
    text.contains(SLOT_MARKER)
}

/// Substitute a whole pool, dropping templates that stay unresolved.
pub(crate) fn materialize(
    pool: &[String],
    matching: &MatchContext,
    text_utils: &dyn TextUtils,
) -> Vec<String> {
    pool.iter()
        .map(|template| prepare_for_saying(template, matching, text_utils))
        .filter(|utterance| !has_unresolved_slot(utterance))
        .collect()
}

/// Pick one candidate from a stage's survivors.
///
/// A sole survivor is returned without consuming randomness, so selection
/// stays deterministic whenever only one phrase is eligible; several
/// survivors are chosen among uniformly.
pub(crate) fn pick<'a, R: Rng + ?Sized>(candidates: &'a [String], rng: &mut R) -> Option<&'a str> {
    match candidates {
        [] => None,
        [only] => Some(only),
        many => many.choose(rng).map(String::as_str),
    }
}
