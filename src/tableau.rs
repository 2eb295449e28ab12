//! Card locations: draw pile, reserve, foundations and lanes.
//!
//! Every location is a `Pile` of `Slot`s stored bottom-to-top, so the last
//! slot is the top card. A `Tableau` owns all thirteen piles of one game and
//! is the only place cards live; moving a card always means popping it from
//! one pile and pushing it onto another.

use core::fmt;

use crate::card::{Card, DECK_LEN, NUM_RANKS, Suit};

/// Number of tableau lanes.
pub const NUM_LANES: usize = 7;
/// Number of foundations (one per suit).
pub const NUM_FOUNDATIONS: usize = 4;

/// A card in a pile together with its visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    pub card: Card,
    pub face_up: bool,
}

impl Slot {
    pub fn face_up(card: Card) -> Self {
        Slot { card, face_up: true }
    }

    pub fn face_down(card: Card) -> Self {
        Slot { card, face_up: false }
    }
}

/// An ordered stack of slots, bottom (index 0) to top (last).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pile {
    slots: Vec<Slot>,
}

impl Pile {
    pub fn new() -> Self {
        Pile { slots: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn push(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    pub fn push_face_up(&mut self, card: Card) {
        self.push(Slot::face_up(card));
    }

    pub fn push_face_down(&mut self, card: Card) {
        self.push(Slot::face_down(card));
    }

    pub fn pop(&mut self) -> Option<Slot> {
        self.slots.pop()
    }

    pub fn top(&self) -> Option<Slot> {
        self.slots.last().copied()
    }

    /// Top card, regardless of whether it is face up.
    pub fn top_card(&self) -> Option<Card> {
        self.top().map(|s| s.card)
    }

    /// The top `count` slots, bottom-to-top, or `None` if the pile is
    /// shorter than that.
    pub fn top_slots(&self, count: usize) -> Option<&[Slot]> {
        let len = self.slots.len();
        if count > len {
            return None;
        }
        Some(&self.slots[len - count..])
    }

    /// Remove and return the top `count` slots, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`. Callers validate first.
    pub fn take_top(&mut self, count: usize) -> Vec<Slot> {
        let at = self.slots.len() - count;
        self.slots.split_off(at)
    }

    /// Number of consecutive face-up slots counted down from the top.
    pub fn face_up_run_len(&self) -> usize {
        self.slots.iter().rev().take_while(|s| s.face_up).count()
    }

    /// Turn the top slot face up. Returns the card if it was face down.
    pub fn reveal_top(&mut self) -> Option<Card> {
        match self.slots.last_mut() {
            Some(slot) if !slot.face_up => {
                slot.face_up = true;
                Some(slot.card)
            }
            _ => None,
        }
    }

    /// Move every slot out of the pile, leaving it empty.
    pub fn drain_all(&mut self) -> Vec<Slot> {
        std::mem::take(&mut self.slots)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

/// 1-based lane number as players type it, for a 0-based lane index.
pub fn lane_number(index: u8) -> u32 {
    u32::from(index) + 1
}

/// A card location as named by a move command.
///
/// Lanes are 0-based internally and printed 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Lane(u8),
    Foundation(Suit),
    DrawPile,
    Reserve,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Lane(i) => write!(f, "lane {}", lane_number(*i)),
            Location::Foundation(suit) => write!(f, "{suit} foundation"),
            Location::DrawPile => f.write_str("draw pile"),
            Location::Reserve => f.write_str("reserve"),
        }
    }
}

/// Complete card layout of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tableau {
    /// Undealt cards, all face down. Draws take from the top.
    pub draw_pile: Pile,
    /// Drawn but unplaced cards, all face up.
    pub reserve: Pile,
    /// One pile per suit, indexed by `Suit::foundation_index`.
    pub foundations: [Pile; NUM_FOUNDATIONS],
    pub lanes: [Pile; NUM_LANES],
}

impl Tableau {
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Deal a shuffled deck into the initial layout.
    ///
    /// The deck is treated as a face-down stack whose top is the last
    /// element. Lane `i` (0-based) receives `i + 1` cards, of which only the
    /// last one dealt is turned face up. The 24 cards left over form the
    /// draw pile in their remaining order.
    pub fn deal(deck: [Card; DECK_LEN]) -> Self {
        let mut tab = Tableau::new_empty();
        let mut stack: Vec<Card> = deck.to_vec();

        for (i, lane) in tab.lanes.iter_mut().enumerate() {
            for j in 0..=i {
                let Some(card) = stack.pop() else {
                    break;
                };
                if j == i {
                    lane.push_face_up(card);
                } else {
                    lane.push_face_down(card);
                }
            }
        }

        for card in stack {
            tab.draw_pile.push_face_down(card);
        }
        tab
    }

    #[inline]
    pub fn lane(&self, index: u8) -> &Pile {
        &self.lanes[index as usize]
    }

    #[inline]
    pub fn lane_mut(&mut self, index: u8) -> &mut Pile {
        &mut self.lanes[index as usize]
    }

    #[inline]
    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundations[suit.foundation_index()]
    }

    #[inline]
    pub fn foundation_mut(&mut self, suit: Suit) -> &mut Pile {
        &mut self.foundations[suit.foundation_index()]
    }

    /// Total number of cards across every location.
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.reserve.len()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.lanes.iter().map(Pile::len).sum::<usize>()
    }

    /// All four foundations are complete.
    pub fn is_win(&self) -> bool {
        self.foundations
            .iter()
            .all(|f| f.len() == NUM_RANKS as usize)
    }

    /// Every card in the layout, in location order, ignoring visibility.
    pub fn flatten_cards(&self) -> Vec<Card> {
        let piles = std::iter::once(&self.draw_pile)
            .chain(std::iter::once(&self.reserve))
            .chain(self.foundations.iter())
            .chain(self.lanes.iter());
        piles.flat_map(|p| p.iter().map(|s| s.card)).collect()
    }
}
