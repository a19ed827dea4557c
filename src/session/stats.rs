use serde::{Deserialize, Serialize};

use crate::wheel::{RouletteColor, SpinOutcome};

/// Color tallies over the whole history. Recomputed from scratch on
/// every change; there is no incremental state to drift.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub red_count: u32,
    pub black_count: u32,
    pub green_count: u32,
    pub total_spins: u32,
}

impl AggregateStats {
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a SpinOutcome>) -> Self {
        let mut stats = Self::default();
        for outcome in history {
            match outcome.color {
                RouletteColor::Red => stats.red_count += 1,
                RouletteColor::Black => stats.black_count += 1,
                RouletteColor::Green => stats.green_count += 1,
            }
            stats.total_spins += 1;
        }
        stats
    }

    /// Percentage share of one color, 0.0 for an empty history.
    pub fn share(&self, color: RouletteColor) -> f64 {
        if self.total_spins == 0 {
            return 0.0;
        }
        let count = match color {
            RouletteColor::Red => self.red_count,
            RouletteColor::Black => self.black_count,
            RouletteColor::Green => self.green_count,
        };
        count as f64 / self.total_spins as f64 * 100.0
    }
}
