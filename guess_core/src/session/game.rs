//! Game loop - chains sessions until the player stops.

use guess_rules::{AnswerMap, ResponseVocabulary};
use serde::Serialize;
use tracing::{debug, info};

use super::{ask_yes_no, Prompter, QuestionSession};
use crate::knowledge_base::{KnowledgeStore, SchemaRegistry};
use crate::learning::LearningController;
use crate::ranking::rank;
use crate::Result;

/// Where a game currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// A fresh session is about to ask its questions.
    AwaitAnswers,
    /// Answers are in; the best guess is about to be announced.
    RankedGuess(AnswerMap),
    /// The player confirmed the subject at this store position.
    Confirmed(usize),
    /// The guess was wrong (or there was nothing to guess).
    Rejected(AnswerMap),
    /// Asking whether to play again.
    RestartPrompt,
    /// The game is over.
    Terminated,
}

/// Counters for a finished game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub sessions: u32,
    pub confirmed: u32,
    pub learned: u32,
}

/// A full game: any number of sessions against one knowledge store.
///
/// The registry is derived once when the game is created. Questions learned
/// during play are appended to it, never re-derived.
pub struct Game {
    store: KnowledgeStore,
    registry: SchemaRegistry,
    vocabulary: ResponseVocabulary,
    summary: GameSummary,
}

impl Game {
    pub fn new(store: KnowledgeStore, vocabulary: ResponseVocabulary) -> Self {
        let registry = SchemaRegistry::from_subjects(store.subjects());
        Self {
            store,
            registry,
            vocabulary,
            summary: GameSummary::default(),
        }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn summary(&self) -> GameSummary {
        self.summary
    }

    /// Give the store back once the game is over.
    pub fn into_store(self) -> KnowledgeStore {
        self.store
    }

    /// Play until the player declines another round.
    pub fn run(&mut self, prompter: &mut impl Prompter) -> Result<GameSummary> {
        prompter.say("Welcome to Guess Who! Think of a character and answer my questions.")?;

        let mut state = GameState::AwaitAnswers;
        while state != GameState::Terminated {
            state = self.step(state, prompter)?;
        }

        prompter.say("Thanks for playing Guess Who!")?;
        info!(
            "Game over after {} sessions ({} confirmed, {} learned)",
            self.summary.sessions, self.summary.confirmed, self.summary.learned
        );
        Ok(self.summary)
    }

    /// Advance the game by one transition.
    pub fn step(
        &mut self,
        state: GameState,
        prompter: &mut impl Prompter,
    ) -> Result<GameState> {
        debug!("Game state: {:?}", state);
        let next = match state {
            GameState::AwaitAnswers => {
                self.summary.sessions += 1;
                let answers =
                    QuestionSession::new(&self.registry, &self.vocabulary).run(prompter)?;
                GameState::RankedGuess(answers)
            }
            GameState::RankedGuess(answers) => {
                let best = rank(self.store.subjects(), &answers).best().map(|c| c.index);
                match best.and_then(|index| self.store.subject(index).map(|s| (index, s))) {
                    Some((index, subject)) => {
                        prompter.say(&format!(
                            "I think your character is... {} from {}!",
                            subject.name, subject.category
                        ))?;
                        if ask_yes_no(prompter, &self.vocabulary, "Did I guess right?")? {
                            GameState::Confirmed(index)
                        } else {
                            GameState::Rejected(answers)
                        }
                    }
                    None => {
                        prompter.say("I don't know any characters yet.")?;
                        GameState::Rejected(answers)
                    }
                }
            }
            GameState::Confirmed(index) => {
                self.store.confirm(index)?;
                self.summary.confirmed += 1;
                prompter.say("Excellent! I got it.")?;
                GameState::RestartPrompt
            }
            GameState::Rejected(answers) => {
                prompter.say("Looks like your character is not in my knowledge base yet.")?;
                LearningController::new(&self.vocabulary).learn(
                    prompter,
                    &mut self.store,
                    &mut self.registry,
                    &answers,
                )?;
                self.summary.learned += 1;
                GameState::RestartPrompt
            }
            GameState::RestartPrompt => {
                if ask_yes_no(prompter, &self.vocabulary, "Do you want to play again?")? {
                    prompter.say("Restarting the game...")?;
                    GameState::AwaitAnswers
                } else {
                    GameState::Terminated
                }
            }
            GameState::Terminated => GameState::Terminated,
        };
        Ok(next)
    }
}
