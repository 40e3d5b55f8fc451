//! Study engine: deck state, review re-insertion, and the word-source boundary.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | Shared types: words, books, levels, word counts, decisions |
//! | `errors`  | Engine, policy, word-source and setup error enums |
//! | `random`  | Injectable uniform source; seeded and scripted implementations |
//! | `policy`  | `ReviewPolicy`: how often and how far ahead missed words return |
//! | `deck`    | Fisher-Yates shuffle and re-insertion offset draw |
//! | `session` | The `Session` state machine driven by `dismiss()` |
//! | `summary` | `SessionResult` computed once a session is finished |
//! | `source`  | `WordSource` trait, service payload parser, static source |
//! | `setup`   | `start_session()`: request → word source → fresh session |

pub mod deck;
pub mod errors;
pub mod models;
pub mod policy;
pub mod random;
pub mod session;
pub mod setup;
pub mod source;
pub mod summary;

pub use errors::{EngineError, PolicyError, SourceError, StudyError};
pub use models::{Book, Decision, Level, StudyRequest, SwipeDirection, Word, WordCount};
pub use policy::ReviewPolicy;
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use session::{DismissOutcome, Reinsertion, Session};
pub use setup::start_session;
pub use source::{parse_word_list, word_prompt, StaticWordSource, WordSource};
pub use summary::{summarize, SessionResult};
