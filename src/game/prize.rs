//! Prize ladder lookups.

use crate::constants::{NO_PRIZE_LABEL, PRIZE_LADDER};
use std::fmt;

/// The prize a player walks away with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prize {
    Nothing,
    /// Ladder position, 0 is the lowest tier.
    Tier(usize),
}

impl Prize {
    /// Prize kept for a guaranteed checkpoint; out-of-range checkpoints keep nothing.
    pub fn from_checkpoint(checkpoint: Option<usize>) -> Self {
        match checkpoint {
            Some(index) if index < PRIZE_LADDER.len() => Self::Tier(index),
            _ => Self::Nothing,
        }
    }

    /// Ladder label; a tier past the top of the ladder reads as no prize.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nothing => NO_PRIZE_LABEL,
            Self::Tier(index) => PRIZE_LADDER.get(*index).copied().unwrap_or(NO_PRIZE_LABEL),
        }
    }

    /// The top of the ladder.
    pub fn top() -> Self {
        Self::Tier(PRIZE_LADDER.len() - 1)
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
