//! # novel_vocab
//!
//! The session engine behind a swipe-to-review vocabulary trainer.
//!
//! A learner picks a novel and a level, a word source supplies a list of
//! words, and the learner resolves one card at a time: swipe right (know it),
//! left (don't know it) or up (mastered). Missed words are parked in a review
//! pile and fed back into the deck a few cards ahead, so weak words come round
//! again before the session ends.
//!
//! ## How it works
//!
//! 1. Build a [`StudyRequest`] (book, level, word count, optional RNG seed).
//! 2. Call [`start_session`] with any [`WordSource`]; the words are shuffled
//!    into a fresh [`Session`], and the [`StdRandom`] seeded from the request
//!    comes back with it for the dismissals that follow.
//! 3. Feed each gesture to [`Session::dismiss`]. After every dismissal there is
//!    a 40% chance the oldest waiting word is re-inserted 2–4 cards ahead; when
//!    the deck runs dry the review pile drains into it.
//! 4. Once [`Session::is_finished`] is true, [`Session::summarize`] returns the
//!    [`SessionResult`].
//!
//! ## Key features
//!
//! - **Injectable randomness**: the engine only draws from a
//!   [`RandomSource`]. Use [`StdRandom`] (seeded or from entropy) in
//!   production and [`ScriptedRandom`] to replay exact draws in tests.
//! - **Atomic transitions**: a rejected `dismiss` leaves the session as it was.
//! - **Configurable review**: [`ReviewPolicy`] holds the re-insertion chance
//!   and offsets, loadable from JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use novel_vocab::{Decision, ScriptedRandom, Session, Word};
//!
//! let words = vec![
//!     Word::new("w1", "austere", "/ɒˈstɪə/", "严峻的"),
//!     Word::new("w2", "reverie", "/ˈrevəri/", "幻想"),
//! ];
//! // High draws keep the input order and skip random re-insertion.
//! let mut rng = ScriptedRandom::constant(0.99);
//! let mut session = Session::initialize(words, &mut rng).unwrap();
//!
//! session.dismiss(Decision::DontKnow, &mut rng).unwrap(); // w1 -> review pile
//! session.dismiss(Decision::Know, &mut rng).unwrap();     // deck ran dry, w1 drains back
//! session.dismiss(Decision::Mastered, &mut rng).unwrap();
//!
//! let result = session.summarize().unwrap();
//! assert_eq!((result.known_count, result.unknown_count, result.mastered_count), (1, 1, 1));
//! ```

pub mod study_engine;

// Convenience re-exports so callers can use `novel_vocab::Session`
// directly without reaching into `study_engine::`.
pub use study_engine::{
    parse_word_list, start_session, summarize, word_prompt, Book, Decision, DismissOutcome,
    EngineError, Level, PolicyError, RandomSource, Reinsertion, ReviewPolicy, ScriptedRandom,
    Session, SessionResult, SourceError, StaticWordSource, StdRandom, StudyError, StudyRequest,
    SwipeDirection, Word, WordCount, WordSource,
};
