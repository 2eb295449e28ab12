//! Render snapshot: everything a display may show, and nothing it may not.
//!
//! Face-down cards are reduced to `SlotView::Hidden` here, so a renderer
//! working from a `Snapshot` cannot reveal them even by accident.

use serde::Serialize;

use crate::card::{Card, Suit};
use crate::game::GameState;
use crate::tableau::{NUM_FOUNDATIONS, NUM_LANES, Pile, Slot};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotView {
    Hidden,
    Visible(Card),
}

impl From<Slot> for SlotView {
    fn from(slot: Slot) -> Self {
        if slot.face_up {
            SlotView::Visible(slot.card)
        } else {
            SlotView::Hidden
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FoundationView {
    pub suit: Suit,
    pub top: Option<Card>,
    pub len: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub score: u32,
    pub moves: u32,
    pub draw_pile_remaining: usize,
    pub reserve_len: usize,
    pub reserve_top: Option<Card>,
    /// Lanes 1..=7, each bottom-to-top.
    pub lanes: Vec<Vec<SlotView>>,
    /// In `Suit::ALL` order.
    pub foundations: Vec<FoundationView>,
    pub won: bool,
    /// Some command would still change the board.
    pub moves_available: bool,
}

fn lane_view(pile: &Pile) -> Vec<SlotView> {
    pile.iter().copied().map(SlotView::from).collect()
}

impl Snapshot {
    pub fn of(game: &GameState) -> Self {
        let tab = &game.tableau;
        let mut lanes = Vec::with_capacity(NUM_LANES);
        lanes.extend(tab.lanes.iter().map(lane_view));

        let mut foundations = Vec::with_capacity(NUM_FOUNDATIONS);
        foundations.extend(Suit::ALL.iter().map(|&suit| {
            let pile = tab.foundation(suit);
            FoundationView {
                suit,
                top: pile.top_card(),
                len: pile.len(),
            }
        }));

        Snapshot {
            score: game.score(),
            moves: game.move_count(),
            draw_pile_remaining: tab.draw_pile.len(),
            reserve_len: tab.reserve.len(),
            reserve_top: tab.reserve.top_card(),
            lanes,
            foundations,
            won: tab.is_win(),
            moves_available: game.has_possible_moves(),
        }
    }

    /// Serialize as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
