use serde::{Deserialize, Serialize};

use crate::study_engine::{errors::EngineError, session::Session};

/// The "Session Complete" numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub total_words: usize,
    /// Right swipes, counting repeats of the same word.
    pub known_count: usize,
    /// Left swipes, counting repeats of the same word.
    pub unknown_count: usize,
    pub mastered_count: usize,
}

/// Summarise a finished session; fails with [`EngineError::InvalidState`]
/// while cards are still in play.
pub fn summarize(session: &Session) -> Result<SessionResult, EngineError> {
    if !session.is_finished() {
        return Err(EngineError::InvalidState("session is not finished"));
    }
    debug_assert_eq!(
        session.mastered_count(),
        session.completed_count() - session.known_count()
    );
    Ok(SessionResult {
        total_words: session.total_words(),
        known_count: session.known_count(),
        unknown_count: session.unknown_count(),
        mastered_count: session.mastered_count(),
    })
}

impl Session {
    pub fn summarize(&self) -> Result<SessionResult, EngineError> {
        summarize(self)
    }
}
