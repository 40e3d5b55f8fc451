//! Property-based tests for the study session engine.
//!
//! Invariants checked after every dismissal, for arbitrary word lists,
//! decision streams, seeds and review policies:
//! - No word id is in play twice (main deck ∪ review pile)
//! - Words in play + words resolved == total words
//! - The deck is never empty while words wait in the review pile
//! - Counters match the decisions issued
//! - A rejected dismissal leaves the session unchanged

use proptest::prelude::*;

use novel_vocab::{Decision, EngineError, ReviewPolicy, Session, StdRandom, Word};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Decision::Know),
        Just(Decision::DontKnow),
        Just(Decision::Mastered),
    ]
}

fn arb_policy() -> impl Strategy<Value = ReviewPolicy> {
    (
        (0u32..=100u32).prop_map(|p| p as f64 / 100.0), // reinsert_probability
        1usize..=4,                                      // min_offset
        1usize..=5,                                      // offset_spread
    )
        .prop_map(|(reinsert_probability, min_offset, offset_spread)| ReviewPolicy {
            reinsert_probability,
            min_offset,
            offset_spread,
        })
}

fn word_list(n: usize) -> Vec<Word> {
    (0..n)
        .map(|i| Word::new(format!("word-{i}"), format!("w{i}"), "", ""))
        .collect()
}

fn snapshot(s: &Session) -> (Vec<String>, Vec<String>, [usize; 4]) {
    (
        s.main_deck().iter().map(|w| w.id.clone()).collect(),
        s.review_pile().iter().map(|w| w.id.clone()).collect(),
        [s.completed_count(), s.known_count(), s.unknown_count(), s.mastered_count()],
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn session_invariants_hold_after_every_dismissal(
        n in 1usize..=30,
        decisions in prop::collection::vec(arb_decision(), 0..120),
        policy in arb_policy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRandom::seeded(seed);
        let mut s = Session::with_policy(word_list(n), policy, &mut rng).unwrap();
        let (mut know, mut dont, mut mastered) = (0usize, 0usize, 0usize);

        for d in decisions {
            if s.is_finished() {
                let before = snapshot(&s);
                let err = s.dismiss(d, &mut rng).unwrap_err();
                prop_assert!(matches!(err, EngineError::InvalidState(_)));
                prop_assert_eq!(snapshot(&s), before);
                break;
            }

            s.dismiss(d, &mut rng).unwrap();
            match d {
                Decision::Know => know += 1,
                Decision::DontKnow => dont += 1,
                Decision::Mastered => mastered += 1,
            }

            let (deck, pile, _) = snapshot(&s);
            let mut in_play: Vec<&String> = deck.iter().chain(pile.iter()).collect();
            let len = in_play.len();
            in_play.sort();
            in_play.dedup();
            prop_assert_eq!(in_play.len(), len, "duplicate word in play");
            prop_assert_eq!(len + s.completed_count(), n);
            prop_assert!(!deck.is_empty() || pile.is_empty());

            prop_assert_eq!(s.known_count(), know);
            prop_assert_eq!(s.unknown_count(), dont);
            prop_assert_eq!(s.mastered_count(), mastered);
            prop_assert_eq!(s.completed_count(), know + mastered);
        }
    }

    #[test]
    fn terminal_only_streams_finish_after_exactly_n(
        n in 1usize..=30,
        seed in any::<u64>(),
        policy in arb_policy(),
    ) {
        let mut rng = StdRandom::seeded(seed);
        let mut s = Session::with_policy(word_list(n), policy, &mut rng).unwrap();
        for i in 0..n {
            prop_assert!(!s.is_finished());
            let d = if i % 2 == 0 { Decision::Know } else { Decision::Mastered };
            s.dismiss(d, &mut rng).unwrap();
        }
        prop_assert!(s.is_finished());
        let r = s.summarize().unwrap();
        prop_assert_eq!(r.total_words, n);
        prop_assert_eq!(r.unknown_count, 0);
        prop_assert_eq!(r.known_count + r.mastered_count, n);
    }

    #[test]
    fn summary_only_after_finish(
        n in 2usize..=30,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRandom::seeded(seed);
        let mut s = Session::initialize(word_list(n), &mut rng).unwrap();
        s.dismiss(Decision::Know, &mut rng).unwrap();
        prop_assert!(matches!(s.summarize(), Err(EngineError::InvalidState(_))));
    }
}
