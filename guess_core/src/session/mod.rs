//! Question sessions and the prompting seam.
//!
//! All player interaction goes through [`Prompter`], so the engine runs the
//! same way against a terminal or a scripted test double.

mod game;

pub use game::*;

use guess_rules::{AnswerMap, Response, ResponseVocabulary};
use tracing::debug;

use crate::knowledge_base::SchemaRegistry;
use crate::Result;

/// Line-oriented interaction with the player.
pub trait Prompter {
    /// Show `prompt` and read one line of input.
    ///
    /// Returns [`crate::Error::InputClosed`] when no more input will arrive.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Show a message.
    fn say(&mut self, message: &str) -> Result<()>;
}

/// Ask until the player gives one of the three response tokens.
pub fn ask_response(
    prompter: &mut impl Prompter,
    vocabulary: &ResponseVocabulary,
    question: &str,
) -> Result<Response> {
    let prompt = format!("{} ({}): ", question, vocabulary.response_hint());
    loop {
        let line = prompter.ask(&prompt)?;
        if let Some(response) = vocabulary.parse_response(&line) {
            return Ok(response);
        }
        prompter.say(&format!(
            "Invalid answer. Use '{}', '{}' or '{}'.",
            vocabulary.yes, vocabulary.no, vocabulary.unknown
        ))?;
    }
}

/// Ask until the player answers yes or no.
pub fn ask_yes_no(
    prompter: &mut impl Prompter,
    vocabulary: &ResponseVocabulary,
    question: &str,
) -> Result<bool> {
    let prompt = format!("{} ({}): ", question, vocabulary.yes_no_hint());
    loop {
        let line = prompter.ask(&prompt)?;
        if let Some(value) = vocabulary.parse_yes_no(&line) {
            return Ok(value);
        }
        prompter.say(&format!(
            "Invalid answer. Use '{}' or '{}'.",
            vocabulary.yes, vocabulary.no
        ))?;
    }
}

/// Ask for free text. Surrounding whitespace is dropped; anything is accepted.
pub fn ask_text(prompter: &mut impl Prompter, prompt: &str) -> Result<String> {
    Ok(prompter.ask(prompt)?.trim().to_string())
}

/// One pass over the registry, one question per key.
pub struct QuestionSession<'a> {
    registry: &'a SchemaRegistry,
    vocabulary: &'a ResponseVocabulary,
}

impl<'a> QuestionSession<'a> {
    pub fn new(registry: &'a SchemaRegistry, vocabulary: &'a ResponseVocabulary) -> Self {
        Self {
            registry,
            vocabulary,
        }
    }

    /// Ask every question in registry order and collect the definite answers.
    pub fn run(&self, prompter: &mut impl Prompter) -> Result<AnswerMap> {
        let mut answers = AnswerMap::new();
        for entry in self.registry.entries() {
            let response = ask_response(prompter, self.vocabulary, &entry.question)?;
            answers.record(entry.key.as_str(), response);
        }
        debug!(
            "Session collected {} of {} answers",
            answers.len(),
            self.registry.len()
        );
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompter;
    use crate::Error;

    fn registry() -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        registry.register("can_fly", "Can fly?");
        registry.register("has_wings", "Has wings?");
        registry.register("is_human", "Is human?");
        registry
    }

    #[test]
    fn test_session_collects_definite_answers() {
        let registry = registry();
        let vocabulary = ResponseVocabulary::english();
        let mut prompter = ScriptedPrompter::new(["yes", "unknown", "NO"]);

        let answers = QuestionSession::new(&registry, &vocabulary)
            .run(&mut prompter)
            .unwrap();

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get("can_fly"), Some(true));
        assert_eq!(answers.get("has_wings"), None);
        assert_eq!(answers.get("is_human"), Some(false));
    }

    #[test]
    fn test_session_reprompts_on_invalid_input() {
        let registry = registry();
        let vocabulary = ResponseVocabulary::english();
        let mut prompter = ScriptedPrompter::new(["maybe", "y", "yes", "no", "unknown"]);

        let answers = QuestionSession::new(&registry, &vocabulary)
            .run(&mut prompter)
            .unwrap();

        assert_eq!(answers.get("can_fly"), Some(true));
        assert_eq!(answers.get("has_wings"), Some(false));
        assert_eq!(prompter.prompts().len(), 5);
        assert_eq!(prompter.prompts()[0], prompter.prompts()[2]);
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_session_asks_in_registry_order() {
        let registry = registry();
        let vocabulary = ResponseVocabulary::english();
        let mut prompter = ScriptedPrompter::new(["unknown", "unknown", "unknown"]);

        let answers = QuestionSession::new(&registry, &vocabulary)
            .run(&mut prompter)
            .unwrap();

        assert!(answers.is_empty());
        assert_eq!(
            prompter.prompts(),
            &[
                "Can fly? (yes/no/unknown): ",
                "Has wings? (yes/no/unknown): ",
                "Is human? (yes/no/unknown): ",
            ]
        );
    }

    #[test]
    fn test_session_on_closed_input() {
        let registry = registry();
        let vocabulary = ResponseVocabulary::english();
        let mut prompter = ScriptedPrompter::new(["yes"]);

        let result = QuestionSession::new(&registry, &vocabulary).run(&mut prompter);
        assert!(matches!(result, Err(Error::InputClosed)));
    }

    #[test]
    fn test_ask_yes_no_rejects_unknown_token() {
        let vocabulary = ResponseVocabulary::spanish();
        let mut prompter = ScriptedPrompter::new(["nose", "tal vez", "si"]);

        assert!(ask_yes_no(&mut prompter, &vocabulary, "¿Tiene alas?").unwrap());
        assert_eq!(prompter.prompts().len(), 3);
        assert_eq!(prompter.prompts()[0], "¿Tiene alas? (si/no): ");
    }

    #[test]
    fn test_ask_text_trims() {
        let mut prompter = ScriptedPrompter::new(["   Neo  "]);
        assert_eq!(ask_text(&mut prompter, "Name: ").unwrap(), "Neo");
    }
}
