//! Simulated study session end to end.
//!
//! Run with: `cargo run --example study`
//! (set `RUST_LOG=novel_vocab=debug` to see every dismissal)
//!
//! 1. A `StaticWordSource` is loaded from a payload in the word service's
//!    JSON format, so no network access is needed.
//! 2. `start_session` deals the words; the request's seed makes the run repeatable.
//! 3. A simulated learner swipes each card: words on a small "hard" list are
//!    swiped left the first time they appear, everything else right or up.
//! 4. The summary is printed once the deck and review pile are empty.

use std::collections::HashSet;

use novel_vocab::{
    start_session, Book, Level, ReviewPolicy, StaticWordSource, StudyRequest,
    SwipeDirection, WordCount,
};
use tracing_subscriber::EnvFilter;

const JANE_EYRE: &str = r#"[
  {"word": "austere",    "pronunciation": "/ɒˈstɪə/",     "translation": "严峻的"},
  {"word": "reverie",    "pronunciation": "/ˈrevəri/",    "translation": "幻想"},
  {"word": "benefactor", "pronunciation": "/ˈbenɪfæktə/", "translation": "恩人"},
  {"word": "governess",  "pronunciation": "/ˈɡʌvənəs/",   "translation": "女家庭教师"},
  {"word": "sombre",     "pronunciation": "/ˈsɒmbə/",     "translation": "阴沉的"},
  {"word": "indignant",  "pronunciation": "/ɪnˈdɪɡnənt/", "translation": "愤慨的"},
  {"word": "tumult",     "pronunciation": "/ˈtjuːmʌlt/",  "translation": "骚动"},
  {"word": "penury",     "pronunciation": "/ˈpenjəri/",   "translation": "贫困"},
  {"word": "ardent",     "pronunciation": "/ˈɑːdnt/",     "translation": "热情的"},
  {"word": "solemn",     "pronunciation": "/ˈsɒləm/",     "translation": "庄严的"}
]"#;

const HARD: [&str; 3] = ["benefactor", "penury", "tumult"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let books: Vec<String> = Book::ALL.iter().map(|b| b.to_string()).collect();
    let levels: Vec<String> = Level::ALL.iter().map(|l| l.to_string()).collect();
    let counts: Vec<String> = WordCount::ALL.iter().map(|c| c.to_string()).collect();
    println!("Books:  {}", books.join(" | "));
    println!("Levels: {}", levels.join(" | "));
    println!("Words:  {}", counts.join(" | "));
    println!();

    let source = StaticWordSource::new().with_json(Book::JaneEyre, JANE_EYRE)?;
    let request = StudyRequest {
        book: Book::JaneEyre,
        level: Level::Intermediate,
        count: WordCount::Ten,
        rng_seed: Some(42),
    };
    let (mut session, mut rng) = start_session(&source, &request, ReviewPolicy::default()).await?;

    println!("Studying {} words from {} ({})", session.total_words(), request.book, request.level);
    println!();

    let mut missed_once: HashSet<String> = HashSet::new();
    while let Some(word) = session.current().cloned() {
        let swipe = if HARD.contains(&word.headword.as_str()) && missed_once.insert(word.id.clone()) {
            SwipeDirection::Left
        } else if word.headword.len() > 6 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Up
        };

        let outcome = session.dismiss(swipe.into(), &mut rng)?;
        let requeue = match &outcome.reinserted {
            Some(r) => format!("  (review: {} back at #{})", r.word_id, r.index + 1),
            None => String::new(),
        };
        println!(
            "  [{:>3.0}%] {:<12} {:<10}{}",
            session.progress() * 100.0,
            word.headword,
            outcome.decision.to_string(),
            requeue
        );
    }

    let result = session.summarize()?;
    println!();
    println!("Session Complete!");
    println!("  Total words: {}", result.total_words);
    println!("  Knew:        {}", result.known_count);
    println!("  Didn't know: {}", result.unknown_count);
    println!("  Mastered:    {}", result.mastered_count);
    Ok(())
}
