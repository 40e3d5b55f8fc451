//! The deck engine: one study pass over a fixed word list.
//!
//! A [`Session`] owns the main deck (front = card on screen), the review pile
//! of missed words, and the counters the summary is built from. It is mutated
//! only through [`Session::dismiss`] and is dropped, never reset, once the
//! learner finishes or goes back to setup.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, info};

use crate::study_engine::{
    deck::{reinsertion_index, shuffle},
    errors::EngineError,
    models::{Decision, Word},
    policy::ReviewPolicy,
    random::RandomSource,
};

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    main_deck: VecDeque<Word>,
    review_pile: VecDeque<Word>,
    total_words: usize,
    completed_count: usize,
    known_count: usize,
    unknown_count: usize,
    mastered_count: usize,
    policy: ReviewPolicy,
}

/// A waiting word that moved from the review pile back into the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reinsertion {
    pub word_id: String,
    /// Position in the new main deck (0 = front).
    pub index: usize,
    /// True when the deck had run dry and the word was pulled in
    /// unconditionally.
    pub forced: bool,
}

/// What a single [`Session::dismiss`] call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DismissOutcome {
    pub dismissed: Word,
    pub decision: Decision,
    pub reinserted: Option<Reinsertion>,
}

impl Session {
    /// Start a session with the default [`ReviewPolicy`].
    pub fn initialize<R: RandomSource + ?Sized>(
        words: Vec<Word>,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        Self::with_policy(words, ReviewPolicy::default(), rng)
    }

    /// Shuffle `words` into a fresh deck.
    ///
    /// Fails with [`EngineError::InvalidInput`] if the list is empty, if two
    /// words share an id, or if `policy` does not validate.
    pub fn with_policy<R: RandomSource + ?Sized>(
        mut words: Vec<Word>,
        policy: ReviewPolicy,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        if words.is_empty() {
            return Err(EngineError::InvalidInput("word list is empty".into()));
        }
        policy
            .validate()
            .map_err(|e| EngineError::InvalidInput(e.to_string()))?;

        {
            let mut ids = HashSet::with_capacity(words.len());
            if let Some(dup) = words.iter().find(|w| !ids.insert(w.id.as_str())) {
                return Err(EngineError::InvalidInput(format!("duplicate word id '{}'", dup.id)));
            }
        }

        shuffle(&mut words, rng);
        let total_words = words.len();
        info!(total_words, "study session started");

        Ok(Session {
            main_deck: words.into(),
            review_pile: VecDeque::new(),
            total_words,
            completed_count: 0,
            known_count: 0,
            unknown_count: 0,
            mastered_count: 0,
            policy,
        })
    }

    /// Resolve the front card with `decision`, then give the review pile a
    /// chance to feed a waiting word back into the deck.
    ///
    /// Only words that were already waiting before this call are eligible for
    /// the random re-insertion, so a word missed just now is never the next
    /// card while other cards remain. If the deck would otherwise be left
    /// empty, the oldest waiting word is moved to the front unconditionally.
    ///
    /// Fails with [`EngineError::InvalidState`] when there is no front card;
    /// the session is left untouched in that case.
    pub fn dismiss<R: RandomSource + ?Sized>(
        &mut self,
        decision: Decision,
        rng: &mut R,
    ) -> Result<DismissOutcome, EngineError> {
        let word = self
            .main_deck
            .pop_front()
            .ok_or(EngineError::InvalidState("no card left to dismiss"))?;
        let waiting = self.review_pile.len();

        match decision {
            Decision::Mastered => {
                self.completed_count += 1;
                self.mastered_count += 1;
            }
            Decision::Know => {
                self.completed_count += 1;
                self.known_count += 1;
            }
            Decision::DontKnow => {
                self.unknown_count += 1;
                self.review_pile.push_back(word.clone());
            }
        }

        let reinserted = if self.main_deck.is_empty() {
            self.drain_one()
        } else if waiting > 0 && rng.uniform() < self.policy.reinsert_probability {
            let index = reinsertion_index(self.main_deck.len(), &self.policy, rng);
            self.review_pile.pop_front().map(|w| {
                let word_id = w.id.clone();
                self.main_deck.insert(index, w);
                Reinsertion { word_id, index, forced: false }
            })
        } else {
            None
        };

        debug!(
            word_id = %word.id,
            %decision,
            reinserted = ?reinserted.as_ref().map(|r| (&r.word_id, r.index)),
            deck = self.main_deck.len(),
            review = self.review_pile.len(),
            "card dismissed"
        );
        if self.is_finished() {
            info!(
                total_words = self.total_words,
                known = self.known_count,
                unknown = self.unknown_count,
                mastered = self.mastered_count,
                "study session finished"
            );
        }

        Ok(DismissOutcome { dismissed: word, decision, reinserted })
    }

    fn drain_one(&mut self) -> Option<Reinsertion> {
        let w = self.review_pile.pop_front()?;
        let word_id = w.id.clone();
        self.main_deck.push_back(w);
        Some(Reinsertion { word_id, index: 0, forced: true })
    }

    /// The card on screen, if any.
    pub fn current(&self) -> Option<&Word> {
        self.main_deck.front()
    }

    /// The front `n` cards, front first.
    pub fn upcoming(&self, n: usize) -> impl Iterator<Item = &Word> + '_ {
        self.main_deck.iter().take(n)
    }

    pub fn main_deck(&self) -> &VecDeque<Word> {
        &self.main_deck
    }

    pub fn review_pile(&self) -> &VecDeque<Word> {
        &self.review_pile
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    pub fn known_count(&self) -> usize {
        self.known_count
    }

    pub fn unknown_count(&self) -> usize {
        self.unknown_count
    }

    pub fn mastered_count(&self) -> usize {
        self.mastered_count
    }

    pub fn policy(&self) -> &ReviewPolicy {
        &self.policy
    }

    /// Share of words resolved for good, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.completed_count as f64 / self.total_words as f64
    }

    pub fn is_finished(&self) -> bool {
        self.main_deck.is_empty() && self.review_pile.is_empty()
    }
}
