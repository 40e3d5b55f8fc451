use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Words
// ---------------------------------------------------------------------------

/// One vocabulary card. Never mutated once the word source has produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    /// Unique within a session.
    pub id: String,
    pub headword: String,
    /// IPA spelling.
    pub pronunciation: String,
    pub translation: String,
}

impl Word {
    pub fn new(
        id: impl Into<String>,
        headword: impl Into<String>,
        pronunciation: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Word {
            id: id.into(),
            headword: headword.into(),
            pronunciation: pronunciation.into(),
            translation: translation.into(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.headword, self.pronunciation, self.translation)
    }
}

// ---------------------------------------------------------------------------
// Study catalogue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Book {
    JaneEyre,
    MonteCristo,
}

impl Book {
    pub const ALL: [Book; 2] = [Book::JaneEyre, Book::MonteCristo];
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Book::JaneEyre    => write!(f, "Jane Eyre"),
            Book::MonteCristo => write!(f, "The Count of Monte Cristo"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner     => write!(f, "Beginner (CET-4)"),
            Level::Intermediate => write!(f, "Intermediate (CET-6)"),
            Level::Advanced     => write!(f, "Advanced (GRE)"),
        }
    }
}

/// How many words one session asks the word source for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WordCount {
    Ten,
    Twenty,
    Thirty,
}

impl WordCount {
    pub const ALL: [WordCount; 3] = [WordCount::Ten, WordCount::Twenty, WordCount::Thirty];

    pub fn get(self) -> usize {
        match self {
            WordCount::Ten    => 10,
            WordCount::Twenty => 20,
            WordCount::Thirty => 30,
        }
    }
}

impl TryFrom<u32> for WordCount {
    type Error = String;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n {
            10 => Ok(WordCount::Ten),
            20 => Ok(WordCount::Twenty),
            30 => Ok(WordCount::Thirty),
            other => Err(format!("word count must be 10, 20 or 30 (got {other})")),
        }
    }
}

impl From<WordCount> for u32 {
    fn from(c: WordCount) -> u32 {
        c.get() as u32
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Everything the setup screen collects before a session can start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRequest {
    pub book: Book,
    #[serde(default = "default_level")]
    pub level: Level,
    #[serde(default = "default_count")]
    pub count: WordCount,
    /// Seeds the random source `start_session` returns. `Some(seed)` makes the
    /// shuffle and every re-insertion reproducible; `None` draws from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_level() -> Level {
    Level::Beginner
}

fn default_count() -> WordCount {
    WordCount::Ten
}

impl StudyRequest {
    /// Minimal constructor. Defaults: Beginner, ten words, entropy.
    pub fn new(book: Book) -> Self {
        StudyRequest {
            book,
            level: default_level(),
            count: default_count(),
            rng_seed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// The learner's verdict on the front card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Know,
    DontKnow,
    Mastered,
}

impl Decision {
    /// Know and Mastered remove the word from play for good.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Decision::DontKnow)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Know     => write!(f, "Know"),
            Decision::DontKnow => write!(f, "Don't know"),
            Decision::Mastered => write!(f, "Mastered"),
        }
    }
}

/// Direction reported by the gesture layer once a swipe completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
}

impl From<SwipeDirection> for Decision {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left  => Decision::DontKnow,
            SwipeDirection::Right => Decision::Know,
            SwipeDirection::Up    => Decision::Mastered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipes_map_to_decisions() {
        assert_eq!(Decision::from(SwipeDirection::Left), Decision::DontKnow);
        assert_eq!(Decision::from(SwipeDirection::Right), Decision::Know);
        assert_eq!(Decision::from(SwipeDirection::Up), Decision::Mastered);
    }

    #[test]
    fn word_count_accepts_only_offered_sizes() {
        assert_eq!(WordCount::try_from(20), Ok(WordCount::Twenty));
        assert!(WordCount::try_from(15).is_err());
        let parsed: Result<WordCount, _> = serde_json::from_str("25");
        assert!(parsed.is_err());
        assert_eq!(serde_json::to_string(&WordCount::Thirty).unwrap(), "30");
    }

    #[test]
    fn study_request_fills_defaults() {
        let req: StudyRequest = serde_json::from_str(r#"{"book":"MonteCristo"}"#).unwrap();
        assert_eq!(req, StudyRequest::new(Book::MonteCristo));

        let req: StudyRequest = serde_json::from_str(
            r#"{"book":"JaneEyre","level":"Advanced","count":30,"rng_seed":7}"#,
        )
        .unwrap();
        assert_eq!(req.level, Level::Advanced);
        assert_eq!(req.count.get(), 30);
        assert_eq!(req.rng_seed, Some(7));
    }

    #[test]
    fn catalogue_labels_match_setup_screen() {
        let books: Vec<String> = Book::ALL.iter().map(|b| b.to_string()).collect();
        assert_eq!(books, ["Jane Eyre", "The Count of Monte Cristo"]);

        let levels: Vec<String> = Level::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(levels, ["Beginner (CET-4)", "Intermediate (CET-6)", "Advanced (GRE)"]);

        let counts: Vec<usize> = WordCount::ALL.iter().map(|c| c.get()).collect();
        assert_eq!(counts, [10, 20, 30]);
        for c in WordCount::ALL {
            assert_eq!(WordCount::try_from(c.get() as u32), Ok(c));
        }
    }
}
