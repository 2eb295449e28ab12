//! Move and command failures.
//!
//! None of these are faults: each one leaves the game untouched and is
//! reported back to the player as a single line of text.

use core::fmt;

use crate::card::{Card, Suit};
use crate::tableau::{Location, lane_number};

/// Why the rules refused a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Only a King may start an empty lane.
    NotAKing(Card),
    /// Only an Ace may start an empty foundation.
    NotAnAce(Card),
    /// The card belongs on a different foundation.
    WrongSuit { card: Card, foundation: Suit },
    /// Lane placement must be one rank lower and the opposite color.
    OutOfSequence { card: Card, onto: Card },
    /// Foundation placement must be the next rank up.
    NotNextOnFoundation { card: Card, onto: Card },
    NotEnoughCards { requested: usize, available: usize },
    /// Part of the requested stack is still face down.
    HiddenCards { requested: usize, visible: usize },
    /// The requested stack is not a descending alternating-color run.
    BrokenStack,
    SameLane,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotAKing(card) => {
                write!(f, "only Kings can be placed in an empty lane, not {card}")
            }
            Rejection::NotAnAce(card) => {
                write!(f, "only Aces can start a suit pile, not {card}")
            }
            Rejection::WrongSuit { card, foundation } => {
                write!(f, "{card} does not belong on the {foundation} pile")
            }
            Rejection::OutOfSequence { card, onto } => write!(
                f,
                "{card} cannot go on {onto} (needs opposite color and one rank lower)"
            ),
            Rejection::NotNextOnFoundation { card, onto } => {
                write!(f, "{card} is not the next card after {onto}")
            }
            Rejection::NotEnoughCards { requested, available } => write!(
                f,
                "not enough cards in the source lane ({requested} requested, {available} there)"
            ),
            Rejection::HiddenCards { requested, visible } => write!(
                f,
                "only {visible} face-up card(s) can be moved, {requested} requested"
            ),
            Rejection::BrokenStack => {
                f.write_str("those cards do not form a descending alternating-color run")
            }
            Rejection::SameLane => f.write_str("source and destination are the same lane"),
        }
    }
}

/// Everything that can stop a command from changing the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    Rejected(Rejection),
    /// Lane moves bouncing back and forth between the same two lanes.
    OscillationBlocked { from: u8, to: u8 },
    /// Nothing to take from this location.
    EmptySource(Location),
    /// The token did not match any command shape.
    Malformed(String),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Rejected(reason) => write!(f, "Invalid move: {reason}."),
            MoveError::OscillationBlocked { from, to } => write!(
                f,
                "!! Oscillation detected between lane {} and lane {}; move skipped, no score added.",
                lane_number(*from),
                lane_number(*to)
            ),
            MoveError::EmptySource(Location::DrawPile) => {
                f.write_str("!! No more cards to draw.")
            }
            MoveError::EmptySource(loc) => write!(f, "Cannot move from an empty {loc}."),
            MoveError::Malformed(token) => {
                write!(f, "!! Invalid command {token:?}. Please try again.")
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<Rejection> for MoveError {
    fn from(reason: Rejection) -> Self {
        MoveError::Rejected(reason)
    }
}
