//! Mock participant generation.
//!
//! DESIGN
//! ======
//! Names are drawn from a fixed pool without replacement using rejection
//! sampling: draw uniformly, redraw on collision. The pool size is checked
//! up front so the redraw loop always terminates.

use rand::Rng;

use crate::services::configurator::BoardError;
use crate::state::{Card, OWNER_IDENTITY, Participant};

pub const NAME_POOL: [&str; 10] = ["MAX", "LEO", "ZOE", "LIA", "KAI", "SAM", "TOM", "LUC", "EVA", "NIA"];

/// Number of mock voters drawn for a fresh board preview.
pub const INITIAL_PARTICIPANTS: usize = 4;

/// Draw `count` distinct names from `pool`.
///
/// # Errors
///
/// Returns `NamePoolExhausted` if `count` exceeds the pool size.
pub fn sample_unique_names<'a, R>(pool: &[&'a str], count: usize, rng: &mut R) -> Result<Vec<&'a str>, BoardError>
where
    R: Rng + ?Sized,
{
    if count > pool.len() {
        return Err(BoardError::NamePoolExhausted { requested: count, available: pool.len() });
    }

    let mut used: Vec<&'a str> = Vec::with_capacity(count);
    while used.len() < count {
        let name = pool[rng.random_range(0..pool.len())];
        if !used.contains(&name) {
            used.push(name);
        }
    }
    Ok(used)
}

/// Pick a vote uniformly from the current deck.
///
/// # Errors
///
/// Returns `EmptyDeck` when there is no card to vote with.
pub fn random_vote<R>(cards: &[Card], rng: &mut R) -> Result<f64, BoardError>
where
    R: Rng + ?Sized,
{
    if cards.is_empty() {
        return Err(BoardError::EmptyDeck);
    }
    Ok(cards[rng.random_range(0..cards.len())].face_value)
}

/// Generate the initial preview voters.
///
/// # Errors
///
/// Returns `NamePoolExhausted` if the pool cannot supply enough names and
/// `EmptyDeck` if there is nothing to vote with.
pub fn generate_participants<R>(cards: &[Card], count: usize, rng: &mut R) -> Result<Vec<Participant>, BoardError>
where
    R: Rng + ?Sized,
{
    let names = sample_unique_names(&NAME_POOL, count, rng)?;
    names
        .into_iter()
        .map(|name| -> Result<Participant, BoardError> {
            Ok(Participant { identity: name.to_string(), vote: random_vote(cards, rng)? })
        })
        .collect()
}

/// The owner's entry with a fresh random vote.
///
/// # Errors
///
/// Returns `EmptyDeck` if there is nothing to vote with.
pub fn owner_participant<R>(cards: &[Card], rng: &mut R) -> Result<Participant, BoardError>
where
    R: Rng + ?Sized,
{
    Ok(Participant { identity: OWNER_IDENTITY.to_string(), vote: random_vote(cards, rng)? })
}

#[cfg(test)]
#[path = "participants_test.rs"]
mod tests;
