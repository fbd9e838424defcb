//! Results preview selection.
//!
//! With auto-close on, every vote is shown as soon as it is cast. With it
//! off, results stay sealed until the owner reveals them.

use std::fmt;

use serde::Serialize;

use crate::state::{BoardSnapshot, Participant};

pub const SEALED_RESULTS_NOTICE: &str = "🔒 Resultados ocultos hasta que el dueño los revele";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    Visible { entries: Vec<Participant> },
    Sealed { notice: &'static str },
}

impl ResultsView {
    #[must_use]
    pub fn for_snapshot(snapshot: &BoardSnapshot) -> Self {
        if snapshot.config.auto_close {
            Self::Visible { entries: snapshot.participants.clone() }
        } else {
            Self::Sealed { notice: SEALED_RESULTS_NOTICE }
        }
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        matches!(self, Self::Sealed { .. })
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible { entries } => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", entry.identity, entry.vote)?;
                }
                Ok(())
            }
            Self::Sealed { notice } => f.write_str(notice),
        }
    }
}

#[cfg(test)]
#[path = "results_test.rs"]
mod tests;
