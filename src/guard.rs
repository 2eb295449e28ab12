//! Oscillation guard for three-digit lane moves.
//!
//! Keeps the last three `(source, destination)` lane pairs. A pattern
//! `A→B, B→A, A→B` means a card is being bounced between two lanes to farm
//! points, and the latest attempt is blocked.

use std::collections::VecDeque;

use log::warn;

use crate::tableau::lane_number;

/// How many recent lane commands the guard remembers.
pub const HISTORY_LEN: usize = 3;

/// A lane-to-lane command code without its card count (0-based lanes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LanePair {
    pub src: u8,
    pub dst: u8,
}

impl LanePair {
    pub fn new(src: u8, dst: u8) -> Self {
        LanePair { src, dst }
    }

    pub fn reversed(self) -> Self {
        LanePair {
            src: self.dst,
            dst: self.src,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct OscillationGuard {
    recent: VecDeque<LanePair>,
}

impl OscillationGuard {
    pub fn new() -> Self {
        OscillationGuard {
            recent: VecDeque::with_capacity(HISTORY_LEN + 1),
        }
    }

    /// Record an attempted lane move, then report whether the history now
    /// shows a back-and-forth pattern.
    ///
    /// Every attempt is recorded, blocked ones included, so repeated tries
    /// keep being caught.
    pub fn record_and_check(&mut self, pair: LanePair) -> bool {
        self.recent.push_back(pair);
        if self.recent.len() > HISTORY_LEN {
            self.recent.pop_front();
        }
        let oscillating = self.is_oscillating();
        if oscillating {
            warn!(
                "repeating moves detected: lane {} <-> lane {}",
                lane_number(pair.src),
                lane_number(pair.dst)
            );
        }
        oscillating
    }

    /// `history[0] == history[2]` and `history[1]` is its reverse.
    pub fn is_oscillating(&self) -> bool {
        if self.recent.len() < HISTORY_LEN {
            return false;
        }
        let first = self.recent[0];
        first == self.recent[2] && self.recent[1] == first.reversed()
    }

    pub fn history(&self) -> impl Iterator<Item = &LanePair> {
        self.recent.iter()
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}
