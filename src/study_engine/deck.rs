use crate::study_engine::{policy::ReviewPolicy, random::RandomSource};

/// Fisher-Yates shuffle: every permutation of `items` is equally likely
/// given a uniform source.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

/// Where a re-queued word lands in a deck of `remaining` cards: one of
/// `min_offset..min_offset + offset_spread`, clamped to the end of the deck.
/// A zero spread always yields `min_offset` (clamped).
pub fn reinsertion_index<R: RandomSource + ?Sized>(
    remaining: usize,
    policy: &ReviewPolicy,
    rng: &mut R,
) -> usize {
    let offset = policy.min_offset + rng.index(policy.offset_spread);
    offset.min(remaining)
}
