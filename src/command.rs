//! Player command parsing.
//!
//! Raw input is parsed exactly once into a `Command`; everything after this
//! point works on lanes, suits and moves, never on strings.
//!
//! Command shapes (case-insensitive, surrounding whitespace ignored):
//!
//! ```text
//! Q        quit
//! D        draw (or recycle the reserve when the draw pile is empty)
//! SDN      move N cards from lane S to lane D   (e.g. 562)
//! SD       move one card from lane S to lane D  (e.g. 56)
//! SX       move lane S's top card to foundation X in {H, D, C, S}
//! PX       move the reserve top to lane X or foundation X
//! ```

use crate::card::Suit;
use crate::error::MoveError;
use crate::moves::Move;
use crate::tableau::NUM_LANES;

/// A parsed player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// A three-digit lane move. These go through the oscillation guard.
    ///
    /// Only lanes 1-7 with a count of 1-9 become a `LaneMove`. Tokens such as
    /// `812` or `120` are `Malformed` and never reach the guard's history.
    LaneMove(Move),
    /// Any other board-changing command.
    Play(Move),
}

/// Lane digit '1'..='7' to a 0-based lane index.
fn lane_from_char(c: char) -> Option<u8> {
    let d = c.to_digit(10)?;
    if (1..=NUM_LANES as u32).contains(&d) {
        Some((d - 1) as u8)
    } else {
        None
    }
}

/// Card count digit '1'..='9'.
fn count_from_char(c: char) -> Option<u8> {
    match c.to_digit(10)? {
        0 => None,
        d => Some(d as u8),
    }
}

/// Parse one line of player input.
pub fn parse_command(input: &str) -> Result<Command, MoveError> {
    let token = input.trim().to_ascii_uppercase();
    let chars: Vec<char> = token.chars().collect();
    let malformed = || MoveError::Malformed(input.trim().to_string());

    match chars.as_slice() {
        ['Q'] => Ok(Command::Quit),
        ['D'] => Ok(Command::Play(Move::draw())),
        [s, d, n] if chars.iter().all(char::is_ascii_digit) => {
            match (lane_from_char(*s), lane_from_char(*d), count_from_char(*n)) {
                (Some(src), Some(dst), Some(count)) => {
                    Ok(Command::LaneMove(Move::lane_to_lane(src, dst, count)))
                }
                _ => Err(malformed()),
            }
        }
        ['P', to] => {
            if let Some(dst) = lane_from_char(*to) {
                Ok(Command::Play(Move::reserve_to_lane(dst)))
            } else if let Some(suit) = Suit::from_char(*to) {
                Ok(Command::Play(Move::reserve_to_foundation(suit)))
            } else {
                Err(malformed())
            }
        }
        [from, to] => {
            let src = lane_from_char(*from).ok_or_else(malformed)?;
            if let Some(dst) = lane_from_char(*to) {
                Ok(Command::Play(Move::lane_to_lane(src, dst, 1)))
            } else if let Some(suit) = Suit::from_char(*to) {
                Ok(Command::Play(Move::lane_to_foundation(src, suit)))
            } else {
                Err(malformed())
            }
        }
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_commands() {
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
        assert_eq!(parse_command("  q "), Ok(Command::Quit));
        assert_eq!(parse_command("d"), Ok(Command::Play(Move::draw())));
    }

    #[test]
    fn three_digit_lane_moves() {
        assert_eq!(
            parse_command("562"),
            Ok(Command::LaneMove(Move::lane_to_lane(4, 5, 2)))
        );
        assert_eq!(
            parse_command("719"),
            Ok(Command::LaneMove(Move::lane_to_lane(6, 0, 9)))
        );
        for bad in ["812", "102", "120", "089"] {
            assert!(matches!(parse_command(bad), Err(MoveError::Malformed(_))), "{bad}");
        }
    }

    #[test]
    fn two_character_transfers() {
        assert_eq!(parse_command("56"), Ok(Command::Play(Move::lane_to_lane(4, 5, 1))));
        assert_eq!(
            parse_command("3h"),
            Ok(Command::Play(Move::lane_to_foundation(2, Suit::Hearts)))
        );
        assert_eq!(parse_command("P4"), Ok(Command::Play(Move::reserve_to_lane(3))));
        assert_eq!(
            parse_command("ps"),
            Ok(Command::Play(Move::reserve_to_foundation(Suit::Spades)))
        );
    }

    #[test]
    fn everything_else_is_malformed() {
        for bad in ["", "INVALID", "XYZ", "10", "P0", "P9", "PX", "H1", "DD", "QQ", "8H", "1234", "1 2"] {
            assert_eq!(
                parse_command(bad),
                Err(MoveError::Malformed(bad.trim().to_string())),
                "{bad:?}"
            );
        }
    }
}
