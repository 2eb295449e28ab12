//! Human-readable rendering of a game.
//!
//! Everything here works from a `Snapshot`, never from the tableau, so a
//! face-down card has no way to reach the screen. Face-down cards are shown
//! as "XX" and face-up cards with their `short_str()` code.

use crate::snapshot::{Snapshot, SlotView};

const RULE: &str =
    "--------------------------------------------------------------------------";

/// Format a single lane slot.
pub fn format_slot(view: SlotView) -> String {
    match view {
        SlotView::Hidden => "XX".to_string(),
        SlotView::Visible(card) => card.short_str(),
    }
}

/// Score, move count, draw pile and reserve.
pub fn render_status(snap: &Snapshot) -> String {
    let mut s = String::new();
    s.push_str(&format!("Score: {} || Moves: {}\n", snap.score, snap.moves));
    s.push_str(&format!(
        "Draw Pile: {} cards remaining.",
        snap.draw_pile_remaining
    ));
    match snap.reserve_top {
        Some(card) => s.push_str(&format!(
            "    Drawn: [{}] ({} cards)",
            card.short_str(),
            snap.reserve_len
        )),
        None => s.push_str("    Drawn: [empty]"),
    }
    s
}

/// One line per lane, bottom card first.
///
/// Example:
///   Lane 3: XX XX 8S
pub fn render_lanes(snap: &Snapshot) -> String {
    let mut s = String::new();
    for (i, lane) in snap.lanes.iter().enumerate() {
        s.push_str(&format!("Lane {}: ", i + 1));
        if lane.is_empty() {
            s.push_str("<- Empty ->");
        } else {
            let cells: Vec<String> = lane.iter().map(|&v| format_slot(v)).collect();
            s.push_str(&cells.join(" "));
        }
        s.push('\n');
    }
    s
}

/// Only the top card of each suit pile is shown.
pub fn render_foundations(snap: &Snapshot) -> String {
    let mut s = String::new();
    for f in &snap.foundations {
        let label = format!("{}:", f.suit);
        let top = f
            .top
            .map(|c| format!("[{}]", c.short_str()))
            .unwrap_or_else(|| "[  ]".to_string());
        s.push_str(&format!("{label:<10}{top}\n"));
    }
    s
}

/// Full multi-line board.
pub fn render_snapshot(snap: &Snapshot) -> String {
    let mut s = String::new();
    s.push_str(RULE);
    s.push('\n');
    s.push_str(&render_status(snap));
    s.push('\n');
    s.push_str(RULE);
    s.push('\n');
    s.push_str(&render_lanes(snap));
    s.push_str(RULE);
    s.push('\n');
    s.push_str("                            Suit Piles\n");
    s.push_str(RULE);
    s.push('\n');
    s.push_str(&render_foundations(snap));
    if snap.won {
        s.push_str("*** All four suit piles are complete. ***\n");
    } else if !snap.moves_available {
        s.push_str("!! No moves remain. Enter Q to quit.\n");
    }
    s
}
