//! Response Selector - decides which utterance a matched actor produces.
//!
//! Selection for a say actor works as follows:
//! 1. **Visit**: register the visit and read the actor's session hit count
//! 2. **Repeat override**: from the second visit onward answer from the
//!    repeat pools, escalating to `on_repeat_again` from the third visit
//! 3. **Primary**: offer the phrases never said in this session
//! 4. **Exhaustion**: fall back to the exhaustion pool once every primary
//!    phrase has been said
//! 5. **Terminal**: with no candidate anywhere, the actor stays silent

mod candidates;

pub use candidates::*;

use rand::Rng;
use tracing::{debug, warn};

use crate::matching::MatchContext;
use crate::response::ActorResponse;
use crate::session::Session;
use script_rules::{Actor, KnownAnswerPolicy, SayActor, TextUtils};

/// Run one turn of response selection for a matched actor.
///
/// Deterministic given its inputs except for the intentional uniform choice
/// among equally eligible candidates, which is drawn from the caller's
/// generator. Returning `None` is the designed "nothing to say" outcome, not
/// a failure.
pub fn select_response<R: Rng + ?Sized>(
    actor: &Actor,
    matching: &MatchContext,
    session: &mut dyn Session,
    text_utils: &dyn TextUtils,
    rng: &mut R,
) -> Option<ActorResponse> {
    match actor {
        Actor::Say(say) => select_say(say, matching, session, text_utils, rng),
    }
}

fn select_say<R: Rng + ?Sized>(
    say: &SayActor,
    matching: &MatchContext,
    session: &mut dyn Session,
    text_utils: &dyn TextUtils,
    rng: &mut R,
) -> Option<ActorResponse> {
    session.register_visit(say.id);
    let hits = session.hit_count(say.id);

    // Repeat override: this actor already fired in the current session.
    if hits >= 2 {
        let mut repeats = Vec::new();
        if hits >= 3 && !say.on_repeat_again.is_empty() {
            repeats = materialize(&say.on_repeat_again, matching, text_utils);
        }
        if repeats.is_empty() && !say.on_repeat.is_empty() {
            repeats = materialize(&say.on_repeat, matching, text_utils);
        }

        if let Some(text) = pick(&repeats, rng) {
            debug!(actor = %say.id, hits, "repeat override answered");
            return Some(ActorResponse::Say {
                actor: say.id,
                text: text.to_string(),
            });
        }
    }

    // Primary stage: phrases the agent has not said yet in this session.
    let fresh = unsaid_candidates(&say.phrases, matching, &*session, text_utils);
    if let Some(text) = pick(&fresh, rng) {
        debug!(actor = %say.id, candidates = fresh.len(), "primary pool answered");
        return Some(ActorResponse::Say {
            actor: say.id,
            text: text.to_string(),
        });
    }

    // Exhaustion stage: every primary phrase has been said at least once.
    let fallback = unsaid_candidates(&say.exhausted_phrases, matching, &*session, text_utils);
    if let Some(text) = pick(&fallback, rng) {
        debug!(actor = %say.id, "exhaustion pool answered");
        return Some(ActorResponse::Say {
            actor: say.id,
            text: text.to_string(),
        });
    }

    if say.known_answer_policy == KnownAnswerPolicy::Skip {
        // Deferring to an alternative rule is not wired up; fall through to
        // the silent outcome.
        warn!(actor = %say.id, "known_answer `skip` with no candidate, staying silent");
    }

    debug!(actor = %say.id, hits, "nothing eligible to say");
    None
}

/// Materialize a pool and keep only phrases never said in this session.
fn unsaid_candidates(
    pool: &[String],
    matching: &MatchContext,
    session: &dyn Session,
    text_utils: &dyn TextUtils,
) -> Vec<String> {
    materialize(pool, matching, text_utils)
        .into_iter()
        .filter(|utterance| session.phrase_count(&text_utils.normalize(utterance)) == 0)
        .collect()
}
