//! Ranking Engine - orders subjects by how well they match the answers.
//!
//! Subjects are ranked by:
//! 1. **Score**: number of answers the subject agrees with (descending)
//! 2. **Popularity**: confirmed guesses so far (descending)
//! 3. **Collection order**: earlier subjects first, via a stable sort
//!
//! There is no minimum score. A non-empty collection always yields a guess.

use guess_rules::{AnswerMap, Subject};
use serde::Serialize;
use tracing::debug;

/// A subject's place in a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    /// Position of the subject in the store.
    pub index: usize,
    pub score: usize,
    pub popularity: u32,
}

/// The full best-first ordering for one answer map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ranking {
    candidates: Vec<RankedCandidate>,
}

impl Ranking {
    /// The top candidate, if there are any subjects at all.
    pub fn best(&self) -> Option<&RankedCandidate> {
        self.candidates.first()
    }

    /// All candidates, best first.
    pub fn candidates(&self) -> &[RankedCandidate] {
        &self.candidates
    }

    /// Store positions in ranked order.
    pub fn order(&self) -> Vec<usize> {
        self.candidates.iter().map(|c| c.index).collect()
    }

    /// Rank (0 = best) of the subject at a store position.
    pub fn rank_of(&self, index: usize) -> Option<usize> {
        self.candidates.iter().position(|c| c.index == index)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Rank every subject against the answers.
pub fn rank(subjects: &[Subject], answers: &AnswerMap) -> Ranking {
    let mut candidates: Vec<RankedCandidate> = subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| RankedCandidate {
            index,
            score: subject.score(answers),
            popularity: subject.popularity,
        })
        .collect();

    // `sort_by` is stable: full ties keep collection order.
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.popularity.cmp(&a.popularity))
    });

    if let Some(best) = candidates.first() {
        debug!(
            "Ranked {} subjects on {} answers, best is #{} (score {}, popularity {})",
            candidates.len(),
            answers.len(),
            best.index,
            best.score,
            best.popularity
        );
    }

    Ranking { candidates }
}

/// The best-matching subject, if the collection is not empty.
pub fn best_guess<'a>(
    subjects: &'a [Subject],
    answers: &AnswerMap,
) -> Option<(usize, &'a Subject)> {
    rank(subjects, answers)
        .best()
        .map(|best| (best.index, &subjects[best.index]))
}
