//! Board configurator — card count, owner participation, and auto-close.
//!
//! DESIGN
//! ======
//! Every operation is a `BoardEvent` applied by `reduce`, which takes the
//! current snapshot and returns the next one. Randomness is passed in so the
//! reducer stays deterministic under a seeded generator. `BoardConfigurator`
//! wraps a snapshot and a generator for callers that just want methods.
//!
//! Participant generation only fires from the `Empty` status. A card-count
//! change on a populated board keeps the existing votes, even when a vote is
//! no longer on the new deck.
//!
//! ERROR HANDLING
//! ==============
//! A rejected event returns `Err` and the caller keeps the previous snapshot.
//! Snapshots can arrive from outside (they deserialize), so `reduce` checks
//! the deck size it is handed before acting on it. `SetCardCount` is exempt:
//! it replaces the count, and the new value is checked instead.

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use crate::services::cards::{self, MAX_CARD_COUNT, MIN_CARD_COUNT};
use crate::services::participants::{self, INITIAL_PARTICIPANTS};
use crate::services::results::ResultsView;
use crate::state::{BoardConfig, BoardSnapshot, Card, Participant, ParticipantStatus};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("card count {requested} outside {min}..={max}")]
    InvalidCardCount { requested: i64, min: usize, max: usize },
    #[error("card count is not a number: {0:?}")]
    NonNumericCardCount(String),
    #[error("name pool exhausted: requested {requested}, available {available}")]
    NamePoolExhausted { requested: usize, available: usize },
    #[error("deck has no cards to vote with")]
    EmptyDeck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// First render of the board preview.
    Mount,
    SetCardCount(i64),
    GenerateInitialParticipants,
    ToggleOwnerVotes,
    ToggleAutoClose,
}

/// Parse a card count typed by a user.
///
/// # Errors
///
/// Returns `NonNumericCardCount` for text that is not an integer and
/// `InvalidCardCount` for integers outside the deck bounds.
pub fn parse_card_count(raw: &str) -> Result<usize, BoardError> {
    validate_card_count(parse_requested(raw)?)
}

fn parse_requested(raw: &str) -> Result<i64, BoardError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| BoardError::NonNumericCardCount(trimmed.to_string()))
}

fn validate_card_count(requested: i64) -> Result<usize, BoardError> {
    cards::checked_count(requested).ok_or(BoardError::InvalidCardCount {
        requested,
        min: MIN_CARD_COUNT,
        max: MAX_CARD_COUNT,
    })
}

/// Reject a deck size that did not come through `validate_card_count`.
fn ensure_card_count(card_count: usize) -> Result<(), BoardError> {
    if cards::is_within_bounds(card_count) {
        return Ok(());
    }
    Err(BoardError::InvalidCardCount {
        requested: i64::try_from(card_count).unwrap_or(i64::MAX),
        min: MIN_CARD_COUNT,
        max: MAX_CARD_COUNT,
    })
}

// =============================================================================
// REDUCER
// =============================================================================

/// Apply `event` to `state`, returning the next snapshot.
///
/// # Errors
///
/// Returns an error if the event is rejected; `state` is left as it was.
pub fn reduce<R>(state: &BoardSnapshot, event: BoardEvent, rng: &mut R) -> Result<BoardSnapshot, BoardError>
where
    R: Rng + ?Sized,
{
    match event {
        BoardEvent::SetCardCount(requested) => set_card_count(state, requested, rng),
        BoardEvent::Mount | BoardEvent::GenerateInitialParticipants => generate_initial(checked(state)?, rng),
        BoardEvent::ToggleOwnerVotes => toggle_owner_votes(checked(state)?, rng),
        BoardEvent::ToggleAutoClose => Ok(toggle_auto_close(checked(state)?)),
    }
}

fn checked(state: &BoardSnapshot) -> Result<&BoardSnapshot, BoardError> {
    ensure_card_count(state.config.card_count)?;
    Ok(state)
}

fn set_card_count<R>(state: &BoardSnapshot, requested: i64, rng: &mut R) -> Result<BoardSnapshot, BoardError>
where
    R: Rng + ?Sized,
{
    let card_count = validate_card_count(requested)?;
    let mut next = state.clone();
    next.config.card_count = card_count;
    debug!(card_count, status = ?next.status, "card count set");

    if next.status == ParticipantStatus::Empty {
        return generate_initial(&next, rng);
    }
    Ok(next)
}

fn generate_initial<R>(state: &BoardSnapshot, rng: &mut R) -> Result<BoardSnapshot, BoardError>
where
    R: Rng + ?Sized,
{
    if state.status != ParticipantStatus::Empty {
        return Ok(state.clone());
    }

    let cards = state.cards();
    let mut participants = participants::generate_participants(&cards, INITIAL_PARTICIPANTS, rng)?;
    let mut status = ParticipantStatus::Generated;

    if state.config.owner_votes {
        participants.push(participants::owner_participant(&cards, rng)?);
        status = ParticipantStatus::GeneratedWithOwner;
    }

    debug!(count = participants.len(), ?status, "preview participants generated");
    Ok(BoardSnapshot { config: state.config, participants, status })
}

fn toggle_owner_votes<R>(state: &BoardSnapshot, rng: &mut R) -> Result<BoardSnapshot, BoardError>
where
    R: Rng + ?Sized,
{
    let mut next = state.clone();
    next.config.owner_votes = !next.config.owner_votes;

    if next.status == ParticipantStatus::Empty {
        return Ok(next);
    }

    if next.config.owner_votes {
        if next.owner().is_none() {
            next.participants.push(participants::owner_participant(&next.cards(), rng)?);
        }
    } else {
        next.participants.retain(|p| !p.is_owner());
    }
    next.status = if next.owner().is_some() {
        ParticipantStatus::GeneratedWithOwner
    } else {
        ParticipantStatus::Generated
    };

    debug!(owner_votes = next.config.owner_votes, count = next.participants.len(), "owner votes toggled");
    Ok(next)
}

fn toggle_auto_close(state: &BoardSnapshot) -> BoardSnapshot {
    let mut next = state.clone();
    next.config.auto_close = !next.config.auto_close;
    debug!(auto_close = next.config.auto_close, "auto-close toggled");
    next
}

// =============================================================================
// CONFIGURATOR
// =============================================================================

/// Stateful front for `reduce`: owns the current snapshot and the generator.
pub struct BoardConfigurator<R: Rng = ThreadRng> {
    snapshot: BoardSnapshot,
    rng: R,
}

impl BoardConfigurator<ThreadRng> {
    /// A configurator with default settings and a populated preview.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial preview cannot be generated.
    pub fn new() -> Result<Self, BoardError> {
        Self::with_rng(BoardConfig::default(), rand::rng())
    }
}

impl<R: Rng> BoardConfigurator<R> {
    /// Build a configurator and run the first-render generation.
    ///
    /// # Errors
    ///
    /// Returns an error if `config.card_count` is out of bounds or the
    /// initial preview cannot be generated.
    pub fn with_rng(config: BoardConfig, rng: R) -> Result<Self, BoardError> {
        let mut configurator = Self::empty(config, rng)?;
        configurator.apply(BoardEvent::Mount)?;
        Ok(configurator)
    }

    /// A configurator that has not generated any participants yet.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCardCount` if `config.card_count` is out of bounds.
    pub fn empty(config: BoardConfig, rng: R) -> Result<Self, BoardError> {
        ensure_card_count(config.card_count)?;
        Ok(Self { snapshot: BoardSnapshot::new(config), rng })
    }

    /// Apply an event, keeping the previous snapshot if it is rejected.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason from `reduce`.
    pub fn apply(&mut self, event: BoardEvent) -> Result<&BoardSnapshot, BoardError> {
        self.snapshot = reduce(&self.snapshot, event, &mut self.rng)?;
        Ok(&self.snapshot)
    }

    /// # Errors
    ///
    /// Returns `InvalidCardCount` when `n` is outside the deck bounds.
    pub fn set_card_count(&mut self, n: i64) -> Result<&BoardSnapshot, BoardError> {
        self.apply(BoardEvent::SetCardCount(n))
    }

    /// Set the card count from raw text input.
    ///
    /// # Errors
    ///
    /// Returns `NonNumericCardCount` or `InvalidCardCount`.
    pub fn set_card_count_text(&mut self, raw: &str) -> Result<&BoardSnapshot, BoardError> {
        let requested = parse_requested(raw)?;
        self.set_card_count(requested)
    }

    /// # Errors
    ///
    /// Returns `NamePoolExhausted` if the pool cannot supply enough names.
    pub fn generate_initial_participants(&mut self) -> Result<&BoardSnapshot, BoardError> {
        self.apply(BoardEvent::GenerateInitialParticipants)
    }

    /// # Errors
    ///
    /// Returns the rejection reason from `reduce`.
    pub fn toggle_owner_votes(&mut self) -> Result<&BoardSnapshot, BoardError> {
        self.apply(BoardEvent::ToggleOwnerVotes)
    }

    /// # Errors
    ///
    /// Returns the rejection reason from `reduce`.
    pub fn toggle_auto_close(&mut self) -> Result<&BoardSnapshot, BoardError> {
        self.apply(BoardEvent::ToggleAutoClose)
    }

    #[must_use]
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.snapshot.config
    }

    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.snapshot.cards()
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.snapshot.participants
    }

    #[must_use]
    pub fn status(&self) -> ParticipantStatus {
        self.snapshot.status
    }

    #[must_use]
    pub fn results(&self) -> ResultsView {
        ResultsView::for_snapshot(&self.snapshot)
    }
}

#[cfg(test)]
#[path = "configurator_test.rs"]
mod tests;
