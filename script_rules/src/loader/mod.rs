//! Declarative actor loader.
//!
//! A scenario file hands each rule's action as a parsed YAML node. The node
//! must be a mapping with a single top-level key naming the actor kind; the
//! value under that key may be the extended mapping form, a sequence-of-
//! strings shorthand, or a single-string shorthand. The registry maps kind
//! keywords to constructors, so new actor kinds plug in without touching the
//! existing ones.

use serde_yaml_ng::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::actors::{Actor, SayActor};
use crate::constants::ScriptConstants;
use crate::text::TextUtils;

/// Errors raised while building actors from configuration nodes.
///
/// All of these are fatal to the configuration load; the context strings
/// carry the actor kind and the offending key or element so the faulty
/// scenario entry can be located.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unknown actor kind `{kind}`")]
    UnknownActorKind { kind: String },

    #[error("unsupported node shape: {context}")]
    UnsupportedShape { context: String },

    #[error("malformed template: {context}")]
    MalformedTemplate { context: String },
}

/// Constructor signature registered per actor kind.
pub type ActorLoaderFn =
    fn(&str, &Value, &ScriptConstants, &dyn TextUtils) -> Result<Actor, LoadError>;

/// Registry dispatching actor kind keywords to their constructors.
pub struct ActorRegistry {
    loaders: HashMap<String, ActorLoaderFn>,
}

impl ActorRegistry {
    /// Create an empty registry with no recognized kinds.
    pub fn empty() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Create a registry with the built-in kinds registered.
    ///
    /// `say` and its alias `rewrite` both construct a [`SayActor`]; the
    /// loaded actor retains the keyword it was declared with.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("say", SayActor::from_node);
        registry.register("rewrite", SayActor::from_node);
        registry
    }

    /// Register a constructor for an actor kind keyword.
    pub fn register(&mut self, keyword: impl Into<String>, loader: ActorLoaderFn) {
        self.loaders.insert(keyword.into(), loader);
    }

    /// Whether a kind keyword is recognized.
    pub fn recognizes(&self, keyword: &str) -> bool {
        self.loaders.contains_key(keyword)
    }

    /// Build an actor from a configuration node.
    ///
    /// The node must be a mapping with exactly one string key naming the
    /// actor kind; the registered constructor receives the value under that
    /// key.
    pub fn load(
        &self,
        node: &Value,
        constants: &ScriptConstants,
        text_utils: &dyn TextUtils,
    ) -> Result<Actor, LoadError> {
        let mapping = node.as_mapping().ok_or_else(|| LoadError::UnsupportedShape {
            context: "actor node must be a single-key mapping".to_string(),
        })?;

        let mut entries = mapping.iter();
        let (key, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(LoadError::UnsupportedShape {
                    context: format!(
                        "actor node must have exactly one top-level key, found {}",
                        mapping.len()
                    ),
                });
            }
        };
        let keyword = key.as_str().ok_or_else(|| LoadError::UnsupportedShape {
            context: "actor kind key must be a string".to_string(),
        })?;

        let loader = self
            .loaders
            .get(keyword)
            .ok_or_else(|| LoadError::UnknownActorKind {
                kind: keyword.to_string(),
            })?;

        loader(keyword, value, constants, text_utils)
    }
}

impl Default for ActorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::KnownAnswerPolicy;
    use crate::text::PlainTextUtils;

    fn load(yaml: &str) -> Result<Actor, LoadError> {
        let node: Value = serde_yaml_ng::from_str(yaml).unwrap();
        ActorRegistry::with_builtins().load(&node, &ScriptConstants::new(), &PlainTextUtils)
    }

    fn phrases_of(actor: &Actor) -> &[String] {
        let Actor::Say(say) = actor;
        &say.phrases
    }

    #[test]
    fn test_scalar_shorthand() {
        let actor = load("say: Привет!").unwrap();
        assert_eq!(phrases_of(&actor), ["Привет!"]);
    }

    #[test]
    fn test_sequence_shorthand() {
        let actor = load("say:\n  - Привет!\n  - Здравствуйте!\n").unwrap();
        assert_eq!(phrases_of(&actor), ["Привет!", "Здравствуйте!"]);
    }

    #[test]
    fn test_extended_form() {
        let actor = load(concat!(
            "say:\n",
            "  phrases:\n",
            "    - Привет!\n",
            "  exhausted:\n",
            "    - Я уже все сказал про приветствия.\n",
            "  on_repeat:\n",
            "    - Ты уже спрашивал.\n",
            "  on_repeat_again:\n",
            "    - Хватит.\n",
            "  known_answer: skip\n",
        ))
        .unwrap();

        let Actor::Say(say) = &actor;
        assert_eq!(say.phrases, ["Привет!"]);
        assert_eq!(say.exhausted_phrases, ["Я уже все сказал про приветствия."]);
        assert_eq!(say.on_repeat, ["Ты уже спрашивал."]);
        assert_eq!(say.on_repeat_again, ["Хватит."]);
        assert_eq!(say.known_answer_policy, KnownAnswerPolicy::Skip);
    }

    #[test]
    fn test_three_shapes_agree_on_phrases() {
        let scalar = load("say: Привет!").unwrap();
        let sequence = load("say:\n  - Привет!\n").unwrap();
        let extended = load("say:\n  phrases:\n    - Привет!\n").unwrap();

        assert_eq!(phrases_of(&scalar), phrases_of(&sequence));
        assert_eq!(phrases_of(&sequence), phrases_of(&extended));
    }

    #[test]
    fn test_rewrite_alias_keeps_keyword() {
        let actor = load("rewrite: Это кот.").unwrap();
        assert_eq!(actor.keyword(), "rewrite");
        assert_eq!(phrases_of(&actor), ["Это кот."]);
    }

    #[test]
    fn test_unknown_kind() {
        let err = load("shout: Привет!").unwrap_err();
        assert!(matches!(err, LoadError::UnknownActorKind { ref kind } if kind == "shout"));
    }

    #[test]
    fn test_non_mapping_node_rejected() {
        let err = load("- say\n").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedShape { .. }));
    }

    #[test]
    fn test_multi_key_mapping_rejected() {
        let err = load("say: Привет!\nrewrite: Пока!\n").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedShape { .. }));
    }

    #[test]
    fn test_non_string_template_rejected() {
        let err = load("say:\n  - Привет!\n  - 42\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedTemplate { .. }));
    }

    #[test]
    fn test_constants_applied_at_load() {
        let node: Value = serde_yaml_ng::from_str("say: Меня зовут $botname.").unwrap();
        let constants: ScriptConstants = [("botname", "Вика")].into_iter().collect();
        let actor = ActorRegistry::with_builtins()
            .load(&node, &constants, &PlainTextUtils)
            .unwrap();
        assert_eq!(phrases_of(&actor), ["Меня зовут Вика."]);
    }

    #[test]
    fn test_registry_extension() {
        fn load_echo(
            keyword: &str,
            node: &Value,
            constants: &ScriptConstants,
            text_utils: &dyn TextUtils,
        ) -> Result<Actor, LoadError> {
            SayActor::from_node(keyword, node, constants, text_utils)
        }

        let mut registry = ActorRegistry::with_builtins();
        assert!(!registry.recognizes("echo"));
        registry.register("echo", load_echo);

        let node: Value = serde_yaml_ng::from_str("echo: Привет!").unwrap();
        let actor = registry
            .load(&node, &ScriptConstants::new(), &PlainTextUtils)
            .unwrap();
        assert_eq!(actor.keyword(), "echo");
    }
}
