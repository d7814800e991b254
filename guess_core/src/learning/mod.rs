//! Learning Controller - grows the knowledge base after a rejected guess.
//!
//! A rejected guess produces one new subject, seeded from the session's
//! answers, plus one new distinguishing question. The question's key is
//! derived from its text, so teaching the same question twice reuses the
//! existing registry entry.

use guess_rules::{
    attribute_key_for_question, strip_question_marks, AnswerMap, ResponseVocabulary, Subject,
};
use tracing::{debug, info};

use crate::knowledge_base::{KnowledgeStore, RegisterOutcome, SchemaRegistry};
use crate::session::{ask_text, ask_yes_no, Prompter};
use crate::{Error, Result};

const NEW_QUESTION_PROMPT: &str =
    "Add a question that tells your character apart (e.g. 'Has wings', 'Wears a hat'): ";

/// Everything the player tells us about a subject we failed to guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDraft {
    pub name: String,
    pub category: String,
    pub group: String,
    /// Free-text distinguishing question, e.g. "Can dodge bullets?".
    pub question: String,
    /// The subject's answer to that question.
    pub answer: bool,
}

/// What a teaching step changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    /// Store position of the new subject.
    pub index: usize,
    /// Attribute key derived from the taught question.
    pub key: String,
    /// Question registered for the key (the existing one if it was known).
    pub question: String,
    /// Whether the registry gained an entry.
    pub question_added: bool,
}

/// Turn a free-text question into its registry phrasing.
///
/// `"¿Can dodge bullets"` becomes `"Can dodge bullets?"`.
pub fn normalize_question(text: &str) -> String {
    format!("{}?", strip_question_marks(text))
}

/// Record a new subject and its distinguishing question.
///
/// The subject's attributes start as a copy of `answers`; the taught key is
/// then set to `draft.answer`, overriding any session answer for the same key.
/// A question whose phrasing is already registered reuses that entry's key.
/// The store is persisted before the registry is extended.
pub fn teach(
    store: &mut KnowledgeStore,
    registry: &mut SchemaRegistry,
    answers: &AnswerMap,
    draft: SubjectDraft,
) -> Result<Lesson> {
    let derived = attribute_key_for_question(&draft.question)
        .ok_or_else(|| Error::EmptyQuestion(draft.question.clone()))?;
    let question = normalize_question(&draft.question);
    let key = registry
        .find_question(&question)
        .map(str::to_string)
        .unwrap_or(derived);

    let mut subject = Subject::new(draft.name, draft.category, draft.group);
    subject.attributes = answers.to_attributes();
    subject.attributes.insert(key.clone(), draft.answer);

    let index = store.append(subject)?;

    let outcome = registry.register(key.as_str(), question);
    let question_added = outcome == RegisterOutcome::Added;
    let question = registry
        .question_for(&key)
        .map(str::to_string)
        .unwrap_or_default();

    if question_added {
        info!("Learned question '{}' ({})", question, key);
    } else {
        debug!("Question for '{}' already known, reusing it", key);
    }

    Ok(Lesson {
        index,
        key,
        question,
        question_added,
    })
}

/// Interactive side of learning: collects a [`SubjectDraft`] and teaches it.
pub struct LearningController<'a> {
    vocabulary: &'a ResponseVocabulary,
}

impl<'a> LearningController<'a> {
    pub fn new(vocabulary: &'a ResponseVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Ask the player for the subject's details and one new question.
    ///
    /// Name, category and group are taken as typed, empty or not. The
    /// question is asked again until it contains at least one word.
    pub fn collect_draft(&self, prompter: &mut impl Prompter) -> Result<SubjectDraft> {
        let name = ask_text(prompter, "Who was your character? ")?;
        let category = ask_text(prompter, "Which series or film is it from? ")?;
        let group = ask_text(prompter, "Which group does it belong to (e.g. Male/Female)? ")?;

        let question = loop {
            let text = ask_text(prompter, NEW_QUESTION_PROMPT)?;
            if attribute_key_for_question(&text).is_some() {
                break text;
            }
            prompter.say("The question needs at least one word.")?;
        };

        let answer = ask_yes_no(prompter, self.vocabulary, &normalize_question(&question))?;

        Ok(SubjectDraft {
            name,
            category,
            group,
            question,
            answer,
        })
    }

    /// Collect a draft from the player and commit it.
    pub fn learn(
        &self,
        prompter: &mut impl Prompter,
        store: &mut KnowledgeStore,
        registry: &mut SchemaRegistry,
        answers: &AnswerMap,
    ) -> Result<Lesson> {
        let draft = self.collect_draft(prompter)?;
        let name = draft.name.clone();
        let lesson = teach(store, registry, answers, draft)?;

        prompter.say(&format!(
            "Character '{}' added. I also learned the question '{}'.",
            name, lesson.question
        ))?;
        Ok(lesson)
    }
}
