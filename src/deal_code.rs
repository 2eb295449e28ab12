//! Deal codes: a unique number for every possible deal.
//!
//! A deal is a permutation of the 52 cards, so it can be written as a
//! mixed-radix (Lehmer) number in `0..52!`. Printing that number at the start
//! of a game and reading it back with `--deal` reproduces the exact layout.
//!
//! `52!` is about `8.07 * 10^67`, far beyond any machine integer, hence
//! `BigUint`.
//!
//! Code 0 is the unshuffled standard deck (`card::standard_deck`).

use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::card::{Card, DECK_LEN, standard_deck};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DealCodeError {
    Empty,
    NotANumber(String),
    /// The number is `>= 52!`.
    OutOfRange,
    /// The deck given to `encode` is not a permutation of the standard deck.
    NotAPermutation,
}

impl fmt::Display for DealCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealCodeError::Empty => f.write_str("empty deal code"),
            DealCodeError::NotANumber(s) => {
                write!(f, "deal code contains non-digits after normalization: {s:?}")
            }
            DealCodeError::OutOfRange => f.write_str("deal code is not below 52!"),
            DealCodeError::NotAPermutation => {
                f.write_str("deck does not hold each of the 52 cards exactly once")
            }
        }
    }
}

impl std::error::Error for DealCodeError {}

/// `52!`, the number of distinct deals.
pub fn deal_count() -> BigUint {
    (1..=DECK_LEN as u32).fold(BigUint::one(), |acc, n| acc * n)
}

/// Encode a deck order as its deal code.
pub fn encode(deck: &[Card; DECK_LEN]) -> Result<BigUint, DealCodeError> {
    // Cards not yet placed, in standard order.
    let mut remaining: Vec<Card> = standard_deck().to_vec();
    let mut code = BigUint::zero();

    for (i, card) in deck.iter().enumerate() {
        let digit = remaining
            .iter()
            .position(|c| c == card)
            .ok_or(DealCodeError::NotAPermutation)?;
        remaining.remove(digit);
        let radix = (DECK_LEN - i) as u32;
        code = code * radix + digit as u32;
    }
    Ok(code)
}

/// Decode a deal code back into the deck order it describes.
pub fn decode(code: &BigUint) -> Result<[Card; DECK_LEN], DealCodeError> {
    if *code >= deal_count() {
        return Err(DealCodeError::OutOfRange);
    }

    // Peel digits off least-significant first; position i has radix 52 - i.
    let mut digits = [0usize; DECK_LEN];
    let mut rest = code.clone();
    for i in (0..DECK_LEN).rev() {
        let radix = (DECK_LEN - i) as u32;
        digits[i] = (&rest % radix).to_usize().ok_or(DealCodeError::OutOfRange)?;
        rest /= radix;
    }

    let mut remaining: Vec<Card> = standard_deck().to_vec();
    let mut deck = [Card(0); DECK_LEN];
    for (slot, &digit) in deck.iter_mut().zip(digits.iter()) {
        *slot = remaining.remove(digit);
    }
    Ok(deck)
}

/// Parse a deal code typed by a player.
///
/// Whitespace and the separators `# - _ . ,` are ignored, so grouped forms
/// such as `"1,234,567"` or `"#1234 5678"` are accepted.
pub fn parse(s: &str) -> Result<BigUint, DealCodeError> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|&ch| !(ch.is_whitespace() || matches!(ch, '#' | '-' | '_' | '.' | ',')))
        .collect();
    if cleaned.is_empty() {
        return Err(DealCodeError::Empty);
    }
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(DealCodeError::NotANumber(cleaned));
    }
    BigUint::parse_bytes(cleaned.as_bytes(), 10).ok_or(DealCodeError::NotANumber(cleaned))
}

/// Parse and decode in one step.
pub fn deck_from_str(s: &str) -> Result<[Card; DECK_LEN], DealCodeError> {
    decode(&parse(s)?)
}
