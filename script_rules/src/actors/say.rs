//! The "say" actor - scripted generation of a reply utterance.

use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

use super::{Actor, ActorId};
use crate::constants::{replace_constants, ScriptConstants};
use crate::loader::LoadError;
use crate::text::TextUtils;

/// What to do when no candidate phrase remains for the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KnownAnswerPolicy {
    /// Stay silent for this actor on this turn (the default).
    #[default]
    Utter,
    /// Hand the turn to an alternative rule. Selection currently treats this
    /// the same as [`KnownAnswerPolicy::Utter`] and logs a warning.
    Skip,
}

/// A scripted reply actor with its phrase pools.
///
/// All pools are fixed at load time; selection never mutates them. Which pool
/// is consulted on a given turn depends on the session's visit counter for
/// this actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SayActor {
    pub id: ActorId,

    /// Scripting keyword this actor was declared with (`say` or `rewrite`).
    pub keyword: String,

    /// Primary pool of reply templates, tried first.
    pub phrases: Vec<String>,

    /// Fallback pool once every primary phrase has already been said.
    pub exhausted_phrases: Vec<String>,

    /// Used instead of the normal pools on the actor's second visit.
    pub on_repeat: Vec<String>,

    /// Used instead of `on_repeat` from the third visit onward, if non-empty.
    pub on_repeat_again: Vec<String>,

    pub known_answer_policy: KnownAnswerPolicy,
}

impl SayActor {
    /// Create a new say actor with empty pools and the default policy.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(),
            keyword: keyword.into(),
            phrases: Vec::new(),
            exhausted_phrases: Vec::new(),
            on_repeat: Vec::new(),
            on_repeat_again: Vec::new(),
            known_answer_policy: KnownAnswerPolicy::default(),
        }
    }

    /// Set the primary phrase pool.
    pub fn with_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the exhaustion fallback pool.
    pub fn with_exhausted<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exhausted_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the second-visit pool.
    pub fn with_on_repeat<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.on_repeat = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the third-visit-onward pool.
    pub fn with_on_repeat_again<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.on_repeat_again = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the known-answer policy.
    pub fn with_policy(mut self, policy: KnownAnswerPolicy) -> Self {
        self.known_answer_policy = policy;
        self
    }

    /// Build a say actor from the value under its kind key.
    ///
    /// Accepts the extended mapping form, the sequence-of-strings shorthand,
    /// and the single-string shorthand. Every collected literal is passed
    /// through constant substitution before storage.
    pub fn from_node(
        keyword: &str,
        node: &Value,
        constants: &ScriptConstants,
        text_utils: &dyn TextUtils,
    ) -> Result<Actor, LoadError> {
        let mut actor = SayActor::new(keyword);

        match node {
            Value::Mapping(mapping) => {
                for (key, value) in mapping {
                    let key = key.as_str().ok_or_else(|| LoadError::UnsupportedShape {
                        context: format!("`{keyword}`: non-string sub-key"),
                    })?;
                    match key {
                        "phrases" => {
                            actor.phrases =
                                collect_templates(keyword, key, value, constants, text_utils)?;
                        }
                        "exhausted" => {
                            actor.exhausted_phrases =
                                collect_templates(keyword, key, value, constants, text_utils)?;
                        }
                        "on_repeat" => {
                            actor.on_repeat =
                                collect_templates(keyword, key, value, constants, text_utils)?;
                        }
                        "on_repeat_again" => {
                            actor.on_repeat_again =
                                collect_templates(keyword, key, value, constants, text_utils)?;
                        }
                        "known_answer" => {
                            actor.known_answer_policy = parse_policy(keyword, value)?;
                        }
                        other => {
                            return Err(LoadError::UnsupportedShape {
                                context: format!("`{keyword}`: unrecognized key `{other}`"),
                            });
                        }
                    }
                }
            }
            Value::Sequence(_) | Value::String(_) => {
                actor.phrases = collect_templates(keyword, "phrases", node, constants, text_utils)?;
            }
            _ => {
                return Err(LoadError::UnsupportedShape {
                    context: format!("`{keyword}`: expected a mapping, sequence or string"),
                });
            }
        }

        Ok(Actor::Say(actor))
    }
}

impl std::fmt::Display for SayActor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \"{}\"", self.keyword, self.phrases.join(" | "))
    }
}

/// Collect the templates under a pool key, applying constant substitution.
///
/// A single string counts as a one-element sequence, mirroring the top-level
/// scalar shorthand.
fn collect_templates(
    keyword: &str,
    key: &str,
    value: &Value,
    constants: &ScriptConstants,
    text_utils: &dyn TextUtils,
) -> Result<Vec<String>, LoadError> {
    match value {
        Value::String(template) => Ok(vec![replace_constants(template, constants, text_utils)]),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(|template| replace_constants(template, constants, text_utils))
                    .ok_or_else(|| LoadError::MalformedTemplate {
                        context: format!("`{keyword}`: non-string entry under `{key}`"),
                    })
            })
            .collect(),
        _ => Err(LoadError::UnsupportedShape {
            context: format!("`{keyword}`: `{key}` must be a string or a sequence of strings"),
        }),
    }
}

fn parse_policy(keyword: &str, value: &Value) -> Result<KnownAnswerPolicy, LoadError> {
    match value.as_str() {
        Some("utter") => Ok(KnownAnswerPolicy::Utter),
        Some("skip") => Ok(KnownAnswerPolicy::Skip),
        _ => Err(LoadError::UnsupportedShape {
            context: format!("`{keyword}`: `known_answer` must be `utter` or `skip`"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::PlainTextUtils;

    #[test]
    fn test_new_say_actor_defaults() {
        let actor = SayActor::new("say");
        assert_eq!(actor.keyword, "say");
        assert!(actor.phrases.is_empty());
        assert!(actor.exhausted_phrases.is_empty());
        assert!(actor.on_repeat.is_empty());
        assert!(actor.on_repeat_again.is_empty());
        assert_eq!(actor.known_answer_policy, KnownAnswerPolicy::Utter);
    }

    #[test]
    fn test_builder_chain() {
        let actor = SayActor::new("say")
            .with_phrases(["Это кот."])
            .with_on_repeat(["Ты уже спрашивал."])
            .with_policy(KnownAnswerPolicy::Skip);

        assert_eq!(actor.phrases, vec!["Это кот."]);
        assert_eq!(actor.on_repeat, vec!["Ты уже спрашивал."]);
        assert_eq!(actor.known_answer_policy, KnownAnswerPolicy::Skip);
    }

    #[test]
    fn test_from_node_rejects_unknown_sub_key() {
        let node: Value = serde_yaml_ng::from_str("phrases:\n  - Привет!\nvolume: loud\n").unwrap();
        let err = SayActor::from_node("say", &node, &ScriptConstants::new(), &PlainTextUtils)
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedShape { .. }));
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn test_from_node_rejects_bad_policy_value() {
        let node: Value = serde_yaml_ng::from_str("known_answer: shrug\n").unwrap();
        let err = SayActor::from_node("say", &node, &ScriptConstants::new(), &PlainTextUtils)
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedShape { .. }));
    }

    #[test]
    fn test_pool_accepts_single_string() {
        let node: Value = serde_yaml_ng::from_str("on_repeat: Ты уже спрашивал.\n").unwrap();
        let actor = SayActor::from_node("say", &node, &ScriptConstants::new(), &PlainTextUtils)
            .unwrap();
        let Actor::Say(say) = actor;
        assert_eq!(say.on_repeat, vec!["Ты уже спрашивал."]);
    }
}
