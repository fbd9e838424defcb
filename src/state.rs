//! Board configurator state.
//!
//! DESIGN
//! ======
//! `BoardSnapshot` is an immutable value: every configurator operation takes
//! a snapshot and returns a new one (see `services::configurator::reduce`).
//! Only `BoardConfig` is long-lived; cards are derived from the card count on
//! demand and participants are mock data drawn at random.

use serde::{Deserialize, Serialize};

use crate::services::cards;

/// Identity reserved for the board owner when they take part in the vote.
pub const OWNER_IDENTITY: &str = "👑 OWN";

pub const DEFAULT_CARD_COUNT: usize = 5;

// =============================================================================
// CARD
// =============================================================================

/// One selectable voting value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub index: usize,
    pub face_value: f64,
}

// =============================================================================
// PARTICIPANT
// =============================================================================

/// A mock voter shown in the preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub identity: String,
    pub vote: f64,
}

impl Participant {
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.identity == OWNER_IDENTITY
    }
}

// =============================================================================
// BOARD CONFIG
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Always within `cards::MIN_CARD_COUNT..=cards::MAX_CARD_COUNT`.
    pub card_count: usize,
    pub owner_votes: bool,
    /// Results are visible immediately when set, sealed otherwise.
    pub auto_close: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { card_count: DEFAULT_CARD_COUNT, owner_votes: false, auto_close: true }
    }
}

// =============================================================================
// PARTICIPANT STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    /// No preview participants drawn yet.
    #[default]
    Empty,
    Generated,
    GeneratedWithOwner,
}

// =============================================================================
// BOARD SNAPSHOT
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub config: BoardConfig,
    pub participants: Vec<Participant>,
    pub status: ParticipantStatus,
}

impl BoardSnapshot {
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self { config, participants: Vec::new(), status: ParticipantStatus::Empty }
    }

    /// Card sequence for the current card count.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        cards::build_cards(self.config.card_count)
    }

    #[must_use]
    pub fn owner(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_owner())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
