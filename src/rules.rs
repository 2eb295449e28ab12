//! Placement rules.
//!
//! These are the only functions that know the rules of the game. Each
//! `can_*` predicate has a `check_*` twin that says *why* a placement fails,
//! which is what the move executor reports back to the player.
//!
//! Nothing in here mutates state.

use log::{debug, trace};

use crate::card::{Card, Rank, Suit};
use crate::error::Rejection;
use crate::tableau::Pile;

/// True if `lower` may sit directly on `upper` in a lane.
///
/// Requires:
///   - colors are opposite (red on black or black on red), and
///   - rank(lower) = rank(upper) - 1
#[inline]
pub fn sequence_valid(lower: Card, upper: Card) -> bool {
    let opposite = lower.color() != upper.color();
    let one_lower = lower.rank_number() + 1 == upper.rank_number();
    trace!("sequence check {lower} on {upper}: opposite color = {opposite}, one lower = {one_lower}");
    opposite && one_lower
}

/// Can `card` be placed on top of `lane`?
pub fn check_lane_placement(card: Card, lane: &Pile) -> Result<(), Rejection> {
    match lane.top_card() {
        None if card.rank() == Rank::King => Ok(()),
        None => Err(Rejection::NotAKing(card)),
        Some(top) if sequence_valid(card, top) => Ok(()),
        Some(top) => {
            debug!("{card} does not go on {top}");
            Err(Rejection::OutOfSequence { card, onto: top })
        }
    }
}

pub fn can_place_on_lane(card: Card, lane: &Pile) -> bool {
    check_lane_placement(card, lane).is_ok()
}

/// Can `card` be placed on the `suit` foundation, whose cards are `foundation`?
///
/// Foundations are single-suit, so a card of another suit is refused even
/// when the pile is empty.
pub fn check_foundation_placement(card: Card, suit: Suit, foundation: &Pile) -> Result<(), Rejection> {
    if card.suit() != suit {
        return Err(Rejection::WrongSuit { card, foundation: suit });
    }
    match foundation.top_card() {
        None if card.rank() == Rank::Ace => Ok(()),
        None => Err(Rejection::NotAnAce(card)),
        Some(top) if top.suit() == card.suit() && card.rank_number() == top.rank_number() + 1 => {
            Ok(())
        }
        Some(top) => Err(Rejection::NotNextOnFoundation { card, onto: top }),
    }
}

pub fn can_place_on_foundation(card: Card, suit: Suit, foundation: &Pile) -> bool {
    check_foundation_placement(card, suit, foundation).is_ok()
}

/// True if `cards` (ordered bottom-to-top, as they sit in a lane) form a run
/// that may be moved as one block: each card sits validly on the one below.
///
/// A single card is trivially a valid stack; an empty slice is not a stack.
pub fn can_move_stack(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return false;
    }
    cards
        .windows(2)
        .all(|pair| sequence_valid(pair[1], pair[0]))
}
