//! Move representation, execution and enumeration.
//!
//! A `Move` is the typed form of one player command that changes the board.
//! `Move::apply` validates it against `crate::rules` and, only if every check
//! passes, mutates the `Tableau`. A rejected move leaves the tableau exactly
//! as it was.
//!
//! Scoring and move counting are done by the caller (`GameState`) from the
//! returned `Applied` value, so this module stays about cards only.

use log::debug;

use crate::card::{Card, Suit};
use crate::error::{MoveError, Rejection};
use crate::rules::{can_move_stack, check_foundation_placement, check_lane_placement};
use crate::tableau::{Location, NUM_LANES, Tableau, lane_number};

/// Points for moving a card from a lane to its foundation.
pub const LANE_TO_FOUNDATION_POINTS: u32 = 20;
/// Points for moving the reserve top to its foundation.
pub const RESERVE_TO_FOUNDATION_POINTS: u32 = 10;
/// Points per card moved between lanes.
pub const LANE_TO_LANE_POINTS_PER_CARD: u32 = 5;

/// The different moves a player can make.
///
/// Lane indices are 0-based internally but printed 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Move the top `count` face-up cards of `src` onto `dst`.
    LaneToLane { src: u8, dst: u8, count: u8 },
    /// Move the top card of a lane to a foundation.
    LaneToFoundation { src: u8, suit: Suit },
    /// Move the reserve top to a lane.
    ReserveToLane { dst: u8 },
    /// Move the reserve top to a foundation.
    ReserveToFoundation { suit: Suit },
    /// Draw one card to the reserve, or recycle the reserve when the draw
    /// pile has run out.
    Draw,
}

/// A single move, wrapping a `MoveKind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub kind: MoveKind,
}

impl From<MoveKind> for Move {
    fn from(kind: MoveKind) -> Self {
        Move { kind }
    }
}

/// What an accepted move actually did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// Cards changed location. `revealed` is the card turned face up on the
    /// source lane, if any.
    Transferred {
        cards: Vec<Card>,
        revealed: Option<Card>,
    },
    /// One card went from the draw pile to the reserve.
    Drew(Card),
    /// The reserve (this many cards) went back into the draw pile.
    Recycled(usize),
}

impl Move {
    pub fn lane_to_lane(src: u8, dst: u8, count: u8) -> Self {
        MoveKind::LaneToLane { src, dst, count }.into()
    }

    pub fn lane_to_foundation(src: u8, suit: Suit) -> Self {
        MoveKind::LaneToFoundation { src, suit }.into()
    }

    pub fn reserve_to_lane(dst: u8) -> Self {
        MoveKind::ReserveToLane { dst }.into()
    }

    pub fn reserve_to_foundation(suit: Suit) -> Self {
        MoveKind::ReserveToFoundation { suit }.into()
    }

    pub fn draw() -> Self {
        MoveKind::Draw.into()
    }

    /// Where the moved cards come from.
    pub fn source(&self) -> Location {
        match self.kind {
            MoveKind::LaneToLane { src, .. } | MoveKind::LaneToFoundation { src, .. } => {
                Location::Lane(src)
            }
            MoveKind::ReserveToLane { .. } | MoveKind::ReserveToFoundation { .. } => {
                Location::Reserve
            }
            MoveKind::Draw => Location::DrawPile,
        }
    }

    /// Where the moved cards go.
    pub fn destination(&self) -> Location {
        match self.kind {
            MoveKind::LaneToLane { dst, .. } | MoveKind::ReserveToLane { dst } => {
                Location::Lane(dst)
            }
            MoveKind::LaneToFoundation { suit, .. } | MoveKind::ReserveToFoundation { suit } => {
                Location::Foundation(suit)
            }
            MoveKind::Draw => Location::Reserve,
        }
    }

    /// Validate this move against `tab` and apply it if legal.
    ///
    /// On `Err` the tableau is unchanged.
    pub fn apply(&self, tab: &mut Tableau) -> Result<Applied, MoveError> {
        let applied = match self.kind {
            MoveKind::LaneToLane { src, dst, count } => {
                lane_to_lane(tab, src, dst, count as usize)?
            }
            MoveKind::LaneToFoundation { src, suit } => lane_to_foundation(tab, src, suit)?,
            MoveKind::ReserveToLane { dst } => reserve_to_lane(tab, dst)?,
            MoveKind::ReserveToFoundation { suit } => reserve_to_foundation(tab, suit)?,
            MoveKind::Draw => draw(tab)?,
        };
        debug!("applied {:?}: {:?}", self.kind, applied);
        Ok(applied)
    }

    /// Score awarded for this move once it has been applied.
    pub fn points(&self, applied: &Applied) -> u32 {
        match (self.kind, applied) {
            (_, Applied::Recycled(_)) => 0,
            (MoveKind::LaneToLane { count, .. }, _) => {
                LANE_TO_LANE_POINTS_PER_CARD * u32::from(count)
            }
            (MoveKind::LaneToFoundation { .. }, _) => LANE_TO_FOUNDATION_POINTS,
            (MoveKind::ReserveToFoundation { .. }, _) => RESERVE_TO_FOUNDATION_POINTS,
            (MoveKind::ReserveToLane { .. }, _) | (MoveKind::Draw, _) => 0,
        }
    }

    /// Render an applied move as a one-line, human-readable string.
    pub fn describe(&self, applied: &Applied) -> String {
        match applied {
            Applied::Drew(card) => format!("Drew card: {card}"),
            Applied::Recycled(n) => {
                format!("<- Recycled {n} unused card(s) back into the draw pile ->")
            }
            Applied::Transferred { cards, revealed } => {
                let moved = match cards.as_slice() {
                    [one] => one.to_string(),
                    [first, .., last] => format!("{first}..{last}"),
                    [] => String::from("nothing"),
                };
                let mut s = format!(
                    "Moved {moved} from {} to {}",
                    self.source(),
                    self.destination()
                );
                if let Some(card) = revealed {
                    s.push_str(&format!(", revealing {card}"));
                }
                s
            }
        }
    }
}

// ----- Executors -----
//
// Each helper runs every check before touching the tableau.

fn lane_index_ok(index: u8) -> bool {
    (index as usize) < NUM_LANES
}

fn lane_to_lane(tab: &mut Tableau, src: u8, dst: u8, count: usize) -> Result<Applied, MoveError> {
    if !lane_index_ok(src) || !lane_index_ok(dst) {
        let token = format!("{}{}{}", lane_number(src), lane_number(dst), count);
        return Err(MoveError::Malformed(token));
    }
    if src == dst {
        return Err(Rejection::SameLane.into());
    }
    let source = tab.lane(src);
    if source.is_empty() {
        return Err(MoveError::EmptySource(Location::Lane(src)));
    }
    let Some(slots) = source.top_slots(count) else {
        return Err(Rejection::NotEnoughCards {
            requested: count,
            available: source.len(),
        }
        .into());
    };
    let visible = source.face_up_run_len();
    if visible < count {
        return Err(Rejection::HiddenCards { requested: count, visible }.into());
    }
    let cards: Vec<Card> = slots.iter().map(|s| s.card).collect();
    if !can_move_stack(&cards) {
        return Err(Rejection::BrokenStack.into());
    }
    check_lane_placement(cards[0], tab.lane(dst))?;

    let moved = tab.lane_mut(src).take_top(count);
    let revealed = tab.lane_mut(src).reveal_top();
    let dest = tab.lane_mut(dst);
    for slot in moved {
        dest.push_face_up(slot.card);
    }
    Ok(Applied::Transferred { cards, revealed })
}

fn lane_to_foundation(tab: &mut Tableau, src: u8, suit: Suit) -> Result<Applied, MoveError> {
    if !lane_index_ok(src) {
        return Err(MoveError::Malformed(format!("{}{}", lane_number(src), suit.short_char())));
    }
    let Some(card) = tab.lane(src).top_card() else {
        return Err(MoveError::EmptySource(Location::Lane(src)));
    };
    check_foundation_placement(card, suit, tab.foundation(suit))?;

    tab.lane_mut(src).pop();
    let revealed = tab.lane_mut(src).reveal_top();
    tab.foundation_mut(suit).push_face_up(card);
    Ok(Applied::Transferred {
        cards: vec![card],
        revealed,
    })
}

fn reserve_to_lane(tab: &mut Tableau, dst: u8) -> Result<Applied, MoveError> {
    if !lane_index_ok(dst) {
        return Err(MoveError::Malformed(format!("P{}", lane_number(dst))));
    }
    let Some(card) = tab.reserve.top_card() else {
        return Err(MoveError::EmptySource(Location::Reserve));
    };
    check_lane_placement(card, tab.lane(dst))?;

    tab.reserve.pop();
    tab.lane_mut(dst).push_face_up(card);
    Ok(Applied::Transferred {
        cards: vec![card],
        revealed: None,
    })
}

fn reserve_to_foundation(tab: &mut Tableau, suit: Suit) -> Result<Applied, MoveError> {
    let Some(card) = tab.reserve.top_card() else {
        return Err(MoveError::EmptySource(Location::Reserve));
    };
    check_foundation_placement(card, suit, tab.foundation(suit))?;

    tab.reserve.pop();
    tab.foundation_mut(suit).push_face_up(card);
    Ok(Applied::Transferred {
        cards: vec![card],
        revealed: None,
    })
}

fn draw(tab: &mut Tableau) -> Result<Applied, MoveError> {
    if let Some(slot) = tab.draw_pile.pop() {
        tab.reserve.push_face_up(slot.card);
        return Ok(Applied::Drew(slot.card));
    }
    if tab.reserve.is_empty() {
        return Err(MoveError::EmptySource(Location::DrawPile));
    }
    // Recycle: the reserve goes back face down in the same bottom-to-top
    // order, so the most recently drawn card is drawn again first.
    let recycled = tab.reserve.drain_all();
    let n = recycled.len();
    for slot in recycled {
        tab.draw_pile.push_face_down(slot.card);
    }
    Ok(Applied::Recycled(n))
}

// ----- Legal move enumeration -----

/// Generate every move that `Move::apply` would currently accept.
///
/// This does not prioritize moves; it just lists everything legal:
///   - Lane -> Foundation (top card only)
///   - Reserve -> Foundation (top card only)
///   - Lane -> Lane (every valid face-up run, up to 9 cards)
///   - Reserve -> Lane
///   - Draw, when either the draw pile or the reserve has cards
pub fn legal_moves(tab: &Tableau) -> Vec<Move> {
    let mut moves = Vec::new();

    for src in 0..NUM_LANES as u8 {
        if let Some(card) = tab.lane(src).top_card() {
            let suit = card.suit();
            if check_foundation_placement(card, suit, tab.foundation(suit)).is_ok() {
                moves.push(Move::lane_to_foundation(src, suit));
            }
        }
    }

    if let Some(card) = tab.reserve.top_card() {
        let suit = card.suit();
        if check_foundation_placement(card, suit, tab.foundation(suit)).is_ok() {
            moves.push(Move::reserve_to_foundation(suit));
        }
    }

    for src in 0..NUM_LANES as u8 {
        let lane = tab.lane(src);
        let max = lane.face_up_run_len().min(9);
        for count in 1..=max {
            let Some(slots) = lane.top_slots(count) else {
                break;
            };
            let cards: Vec<Card> = slots.iter().map(|s| s.card).collect();
            if !can_move_stack(&cards) {
                // Longer runs contain this one, so they are broken too.
                break;
            }
            for dst in 0..NUM_LANES as u8 {
                if dst != src && check_lane_placement(cards[0], tab.lane(dst)).is_ok() {
                    moves.push(Move::lane_to_lane(src, dst, count as u8));
                }
            }
        }
    }

    if let Some(card) = tab.reserve.top_card() {
        for dst in 0..NUM_LANES as u8 {
            if check_lane_placement(card, tab.lane(dst)).is_ok() {
                moves.push(Move::reserve_to_lane(dst));
            }
        }
    }

    if !tab.draw_pile.is_empty() || !tab.reserve.is_empty() {
        moves.push(Move::draw());
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank::{self, *};
    use crate::card::Suit::*;
    use crate::card::standard_deck;

    fn c(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn moving_top_card_reveals_the_hidden_one_below() {
        let mut tab = Tableau::new_empty();
        tab.lane_mut(0).push_face_down(c(Hearts, Queen));
        tab.lane_mut(0).push_face_up(c(Spades, King));

        let applied = Move::lane_to_lane(0, 1, 1).apply(&mut tab).unwrap();
        assert_eq!(
            applied,
            Applied::Transferred {
                cards: vec![c(Spades, King)],
                revealed: Some(c(Hearts, Queen)),
            }
        );
        assert!(tab.lane(0).top().unwrap().face_up);
        assert_eq!(tab.lane(1).top(), Some(crate::tableau::Slot::face_up(c(Spades, King))));
    }

    #[test]
    fn stack_move_keeps_order_and_scores_per_card() {
        let mut tab = Tableau::new_empty();
        tab.lane_mut(0).push_face_down(c(Clubs, Two));
        tab.lane_mut(0).push_face_up(c(Spades, Eight));
        tab.lane_mut(0).push_face_up(c(Hearts, Seven));
        tab.lane_mut(0).push_face_up(c(Clubs, Six));
        tab.lane_mut(1).push_face_up(c(Diamonds, Nine));

        let mv = Move::lane_to_lane(0, 1, 3);
        let applied = mv.apply(&mut tab).unwrap();
        assert_eq!(mv.points(&applied), 15);

        let dest: Vec<Card> = tab.lane(1).iter().map(|s| s.card).collect();
        assert_eq!(
            dest,
            vec![c(Diamonds, Nine), c(Spades, Eight), c(Hearts, Seven), c(Clubs, Six)]
        );
        assert_eq!(tab.lane(0).len(), 1);
        assert!(tab.lane(0).top().unwrap().face_up);
    }

    #[test]
    fn rejected_moves_leave_the_tableau_untouched() {
        let mut tab = Tableau::new_empty();
        tab.lane_mut(0).push_face_down(c(Clubs, Two));
        tab.lane_mut(0).push_face_up(c(Hearts, Seven));
        tab.lane_mut(1).push_face_up(c(Hearts, Eight));
        let before = tab.clone();

        let cases = [
            (Move::lane_to_lane(0, 1, 1), MoveError::Rejected(Rejection::OutOfSequence {
                card: c(Hearts, Seven),
                onto: c(Hearts, Eight),
            })),
            (Move::lane_to_lane(0, 1, 2), MoveError::Rejected(Rejection::HiddenCards {
                requested: 2,
                visible: 1,
            })),
            (Move::lane_to_lane(0, 1, 5), MoveError::Rejected(Rejection::NotEnoughCards {
                requested: 5,
                available: 2,
            })),
            (Move::lane_to_lane(0, 2, 1), MoveError::Rejected(Rejection::NotAKing(c(Hearts, Seven)))),
            (Move::lane_to_lane(0, 0, 1), MoveError::Rejected(Rejection::SameLane)),
            (Move::lane_to_lane(3, 1, 1), MoveError::EmptySource(Location::Lane(3))),
            (Move::lane_to_foundation(0, Hearts), MoveError::Rejected(Rejection::NotAnAce(c(Hearts, Seven)))),
            (Move::reserve_to_lane(2), MoveError::EmptySource(Location::Reserve)),
            (Move::reserve_to_foundation(Spades), MoveError::EmptySource(Location::Reserve)),
            (Move::draw(), MoveError::EmptySource(Location::DrawPile)),
        ];

        for (mv, expected) in cases {
            assert_eq!(mv.apply(&mut tab), Err(expected), "{mv:?}");
            assert_eq!(tab, before, "{mv:?} must not change the tableau");
        }
    }

    #[test]
    fn out_of_range_lanes_are_malformed() {
        let mut tab = Tableau::new_empty();
        tab.reserve.push_face_up(c(Spades, King));
        let before = tab.clone();

        let cases = [
            (Move::lane_to_lane(255, 0, 1), "25611"),
            (Move::lane_to_lane(0, 7, 2), "182"),
            (Move::lane_to_foundation(255, Hearts), "256H"),
            (Move::reserve_to_lane(255), "P256"),
        ];
        for (mv, token) in cases {
            assert_eq!(mv.apply(&mut tab), Err(MoveError::Malformed(token.to_string())));
            assert_eq!(tab, before);
        }
    }

    #[test]
    fn broken_stack_is_refused() {
        let mut tab = Tableau::new_empty();
        tab.lane_mut(0).push_face_up(c(Spades, Eight));
        tab.lane_mut(0).push_face_up(c(Clubs, Seven));
        tab.lane_mut(1).push_face_up(c(Hearts, Nine));

        assert_eq!(
            Move::lane_to_lane(0, 1, 2).apply(&mut tab),
            Err(MoveError::Rejected(Rejection::BrokenStack))
        );
    }

    #[test]
    fn reserve_card_stays_put_when_refused() {
        let mut tab = Tableau::new_empty();
        tab.reserve.push_face_up(c(Diamonds, Five));
        tab.lane_mut(0).push_face_up(c(Hearts, Six));

        assert!(Move::reserve_to_lane(0).apply(&mut tab).is_err());
        assert!(Move::reserve_to_foundation(Diamonds).apply(&mut tab).is_err());
        assert_eq!(tab.reserve.top_card(), Some(c(Diamonds, Five)));
        assert_eq!(tab.reserve.len(), 1);
    }

    #[test]
    fn reserve_moves_score_asymmetrically() {
        let mut tab = Tableau::new_empty();
        tab.reserve.push_face_up(c(Hearts, Ace));
        tab.reserve.push_face_up(c(Spades, King));

        let to_lane = Move::reserve_to_lane(4);
        let applied = to_lane.apply(&mut tab).unwrap();
        assert_eq!(to_lane.points(&applied), 0);

        let to_foundation = Move::reserve_to_foundation(Hearts);
        let applied = to_foundation.apply(&mut tab).unwrap();
        assert_eq!(to_foundation.points(&applied), RESERVE_TO_FOUNDATION_POINTS);
        assert!(tab.reserve.is_empty());
        assert_eq!(tab.foundation(Hearts).len(), 1);
    }

    #[test]
    fn draw_then_recycle() {
        let mut tab = Tableau::new_empty();
        tab.draw_pile.push_face_down(c(Clubs, Three));
        tab.draw_pile.push_face_down(c(Hearts, Nine));

        assert_eq!(Move::draw().apply(&mut tab), Ok(Applied::Drew(c(Hearts, Nine))));
        assert_eq!(Move::draw().apply(&mut tab), Ok(Applied::Drew(c(Clubs, Three))));
        assert!(tab.reserve.iter().all(|s| s.face_up));
        assert!(tab.draw_pile.is_empty());

        let applied = Move::draw().apply(&mut tab).unwrap();
        assert_eq!(applied, Applied::Recycled(2));
        assert_eq!(Move::draw().points(&applied), 0);
        assert!(tab.reserve.is_empty());
        assert_eq!(tab.draw_pile.len(), 2);
        assert!(tab.draw_pile.iter().all(|s| !s.face_up));

        // Same order as the reserve had: last drawn comes back first.
        assert_eq!(Move::draw().apply(&mut tab), Ok(Applied::Drew(c(Clubs, Three))));
    }

    #[test]
    fn legal_moves_are_all_accepted() {
        let tab = Tableau::deal(standard_deck());
        let moves = legal_moves(&tab);
        println!("legal moves in the unshuffled deal:");
        for mv in &moves {
            println!("  {:?}", mv.kind);
        }

        // QD (lane 7) onto KS (lane 1) and the draw are both available.
        assert!(moves.contains(&Move::lane_to_lane(6, 0, 1)));
        assert!(moves.contains(&Move::draw()));

        for mv in moves {
            let mut scratch = tab.clone();
            assert!(mv.apply(&mut scratch).is_ok(), "{mv:?} listed but refused");
        }
    }

    #[test]
    fn describe_names_cards_and_locations() {
        let mv = Move::lane_to_lane(6, 0, 1);
        let applied = Applied::Transferred {
            cards: vec![c(Diamonds, Queen)],
            revealed: Some(c(Diamonds, King)),
        };
        assert_eq!(mv.describe(&applied), "Moved QD from lane 7 to lane 1, revealing KD");
    }
}
