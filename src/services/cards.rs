//! Card deck derivation.
//!
//! Cards are pure derived data: the deck for a count `n` is the first `n`
//! entries of `SCORE_SEQUENCE`, wrapping by index.

use crate::state::Card;

/// Permissible voting values, in display order.
pub const SCORE_SEQUENCE: [f64; 9] = [0.5, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0];

pub const MIN_CARD_COUNT: usize = 2;
pub const MAX_CARD_COUNT: usize = SCORE_SEQUENCE.len();

/// Face value for the card at `index`.
#[must_use]
pub fn face_value(index: usize) -> f64 {
    SCORE_SEQUENCE[index % SCORE_SEQUENCE.len()]
}

/// Build the deck for `count` cards. Bounds are enforced by the configurator.
#[must_use]
pub fn build_cards(count: usize) -> Vec<Card> {
    (0..count)
        .map(|index| Card { index, face_value: face_value(index) })
        .collect()
}

#[must_use]
pub fn is_within_bounds(count: usize) -> bool {
    (MIN_CARD_COUNT..=MAX_CARD_COUNT).contains(&count)
}

/// A user-supplied count as a deck size, or `None` when out of bounds.
#[must_use]
pub fn checked_count(count: i64) -> Option<usize> {
    usize::try_from(count).ok().filter(|n| is_within_bounds(*n))
}

#[cfg(test)]
#[path = "cards_test.rs"]
mod tests;
