//! Game-level state: the tableau plus score, move count and the
//! oscillation guard.
//!
//! `GameState` is the session object. It is created once per game and owned
//! by whoever drives the turn loop; every player command goes through
//! `GameState::handle_command`, which produces exactly one `Reply`.

use core::fmt;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::card::{Card, DECK_LEN, Suit, shuffled_deck};
use crate::command::{Command, parse_command};
use crate::error::MoveError;
use crate::guard::{LanePair, OscillationGuard};
use crate::moves::{Applied, Move, MoveKind, legal_moves};
use crate::snapshot::Snapshot;
use crate::tableau::{Location, Tableau};

/// An accepted move and what it earned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub mv: Move,
    pub applied: Applied,
    pub points: u32,
    /// This move completed all four foundations.
    pub won: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mv.describe(&self.applied))?;
        if self.points > 0 {
            write!(f, " (+{})", self.points)?;
        }
        if self.won {
            f.write_str(" -- all suit piles complete, you win!")?;
        }
        Ok(())
    }
}

/// The engine's answer to one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Accepted(Report),
    Refused(MoveError),
    Quit,
}

impl Reply {
    pub fn is_quit(&self) -> bool {
        matches!(self, Reply::Quit)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Accepted(report) => write!(f, "{report}"),
            Reply::Refused(err) => write!(f, "{err}"),
            Reply::Quit => f.write_str("!! Exiting the game."),
        }
    }
}

/// Complete description of a game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current layout.
    pub tableau: Tableau,
    score: u32,
    move_count: u32,
    guard: OscillationGuard,
}

impl GameState {
    /// Deal a new game from the given deck order.
    pub fn new(deck: [Card; DECK_LEN]) -> Self {
        Self::from_tableau(Tableau::deal(deck))
    }

    /// Deal a reproducible game from a numeric seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(shuffled_deck(&mut StdRng::seed_from_u64(seed)))
    }

    /// Start a session on an arbitrary layout, with zero score and moves.
    pub fn from_tableau(tableau: Tableau) -> Self {
        GameState {
            tableau,
            score: 0,
            move_count: 0,
            guard: OscillationGuard::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Parse and run one line of player input.
    pub fn handle_command(&mut self, input: &str) -> Reply {
        match parse_command(input) {
            Ok(cmd) => self.execute(cmd),
            Err(err) => {
                info!("unrecognized command {:?}", input.trim());
                Reply::Refused(err)
            }
        }
    }

    /// Run an already-parsed command.
    pub fn execute(&mut self, cmd: Command) -> Reply {
        let result = match cmd {
            Command::Quit => return Reply::Quit,
            Command::LaneMove(mv) => self.apply_guarded(mv),
            Command::Play(mv) => self.apply_move(mv),
        };
        match result {
            Ok(report) => Reply::Accepted(report),
            Err(err) => Reply::Refused(err),
        }
    }

    /// Apply a three-digit lane move through the oscillation guard.
    pub fn apply_guarded(&mut self, mv: Move) -> Result<Report, MoveError> {
        if let MoveKind::LaneToLane { src, dst, .. } = mv.kind {
            if self.guard.record_and_check(LanePair::new(src, dst)) {
                return Err(MoveError::OscillationBlocked { from: src, to: dst });
            }
        }
        self.apply_move(mv)
    }

    /// Apply a move, updating score and move count if it is accepted.
    ///
    /// Recycling the reserve neither scores nor counts as a move.
    pub fn apply_move(&mut self, mv: Move) -> Result<Report, MoveError> {
        let applied = mv.apply(&mut self.tableau)?;
        let points = mv.points(&applied);
        self.score += points;
        if !matches!(applied, Applied::Recycled(_)) {
            self.move_count += 1;
        }
        let won = matches!(mv.destination(), Location::Foundation(_)) && self.tableau.is_win();
        let report = Report {
            mv,
            applied,
            points,
            won,
        };
        info!("{report}; score {} after {} moves", self.score, self.move_count);
        Ok(report)
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }

    pub fn is_won(&self) -> bool {
        self.tableau.is_win()
    }

    /// At least one command would currently change the board.
    pub fn has_possible_moves(&self) -> bool {
        !legal_moves(&self.tableau).is_empty()
    }

    /// Number of cards in a lane (1-based, as players number them).
    pub fn lane_size(&self, lane: u8) -> Option<usize> {
        let index = lane.checked_sub(1)?;
        self.tableau.lanes.get(index as usize).map(|p| p.len())
    }

    pub fn foundation_size(&self, suit: Suit) -> usize {
        self.tableau.foundation(suit).len()
    }

    /// The most recently drawn card still waiting in the reserve.
    pub fn last_drawn_card(&self) -> Option<Card> {
        self.tableau.reserve.top_card()
    }

    pub fn draw_pile_size(&self) -> usize {
        self.tableau.draw_pile.len()
    }

    pub fn reserve_size(&self) -> usize {
        self.tableau.reserve.len()
    }

    /// Lane pairs currently remembered by the oscillation guard.
    pub fn recent_lane_moves(&self) -> Vec<LanePair> {
        self.guard.history().copied().collect()
    }
}
