//! Card, Suit, Rank and Color types for a standard 52-card deck.
//!
//! - `Card` is a compact 1-byte identity (0..=51). It never changes once
//!   dealt; whether a card is face up is a property of the slot it sits in
//!   (see `tableau::Slot`), not of the card.
//! - `Suit`, `Rank` and `Color` give human-readable structure on top of that.

use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Serialize, Serializer};

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// Local convenience: deck length as `usize`.
pub const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// A playing card represented compactly as an index in 0..=51.
///
/// The mapping is:
/// ```text
/// index = suit as u8 * 13 + rank as u8
/// ```
/// where `rank` is 0=Ace, 1=Two, ..., 12=King.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card(pub u8);

/// The four suits, in foundation order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

/// The thirteen ranks. Ace is the lowest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Black,
}

impl Card {
    /// Create a new card from a suit and rank.
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        let s = suit as u8;
        let r = rank as u8;
        debug_assert!(s < NUM_SUITS && r < NUM_RANKS);
        Card(s * NUM_RANKS + r)
    }

    /// Create a card from a raw index in 0..=51.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `index >= 52`.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < CARDS_PER_DECK);
        Card(index)
    }

    /// Return the raw 0..=51 index of this card.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn suit(self) -> Suit {
        Suit::from_u8(self.0 / NUM_RANKS)
    }

    #[inline]
    pub fn rank(self) -> Rank {
        Rank::from_u8(self.0 % NUM_RANKS)
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn rank_number(self) -> u8 {
        self.rank().number()
    }

    #[inline]
    pub fn color(self) -> Color {
        self.suit().color()
    }

    /// Short string like "AH", "7C", "10D", "KS".
    pub fn short_str(self) -> String {
        format!("{}{}", self.rank().label(), self.suit().short_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Suit {
    /// All suits in a fixed, reproducible order (the foundation order).
    pub const ALL: [Suit; NUM_SUITS as usize] = [
        Suit::Hearts,
        Suit::Diamonds,
        Suit::Clubs,
        Suit::Spades,
    ];

    /// Construct a suit from a small integer 0..=3.
    ///
    /// # Panics
    ///
    /// Panics if `v >= 4`.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Suit::Hearts,
            1 => Suit::Diamonds,
            2 => Suit::Clubs,
            3 => Suit::Spades,
            _ => panic!("invalid suit: {v}"),
        }
    }

    /// Parse the single-letter code used by move commands (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Single-character representation: 'H', 'D', 'C', or 'S'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    #[inline]
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Index of this suit's foundation (same as `Suit::ALL` position).
    #[inline]
    pub fn foundation_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Construct a rank from a small integer 0..=12.
    ///
    /// # Panics
    ///
    /// Panics if `v >= 13`.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        Rank::ALL
            .get(v as usize)
            .copied()
            .unwrap_or_else(|| panic!("invalid rank: {v}"))
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Generate a standard 52-card deck in a fixed order.
///
/// Suits follow `Suit::ALL` order, and ranks follow `Rank::ALL` order.
pub fn standard_deck() -> [Card; DECK_LEN] {
    let mut cards = [Card(0); DECK_LEN];
    let mut i = 0usize;
    for &suit in Suit::ALL.iter() {
        for &rank in Rank::ALL.iter() {
            cards[i] = Card::new(suit, rank);
            i += 1;
        }
    }
    cards
}

/// Return a standard deck shuffled with the given random source.
///
/// Pass a seeded `StdRng` for a reproducible deal, or `thread_rng()` for a
/// fresh one every game.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> [Card; DECK_LEN] {
    let mut deck = standard_deck();
    deck.shuffle(rng);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn card_index_round_trip() {
        for &suit in Suit::ALL.iter() {
            for &rank in Rank::ALL.iter() {
                let c = Card::new(suit, rank);
                assert!(c.index() < CARDS_PER_DECK);
                assert_eq!(c.suit(), suit);
                assert_eq!(c.rank(), rank);
                assert_eq!(Card::from_index(c.index()), c);
            }
        }
    }

    #[test]
    fn suit_codes_parse_case_insensitively() {
        assert_eq!(Suit::from_char('h'), Some(Suit::Hearts));
        assert_eq!(Suit::from_char('D'), Some(Suit::Diamonds));
        assert_eq!(Suit::from_char('c'), Some(Suit::Clubs));
        assert_eq!(Suit::from_char('S'), Some(Suit::Spades));
        assert_eq!(Suit::from_char('P'), None);
        assert_eq!(Suit::from_char('1'), None);

        for suit in Suit::ALL {
            assert_eq!(Suit::from_char(suit.short_char()), Some(suit));
            assert_eq!(Suit::ALL[suit.foundation_index()], suit);
        }
    }

    #[test]
    fn card_colors_are_correct() {
        for rank in Rank::ALL {
            assert_eq!(Card::new(Suit::Hearts, rank).color(), Color::Red);
            assert_eq!(Card::new(Suit::Diamonds, rank).color(), Color::Red);
            assert_eq!(Card::new(Suit::Clubs, rank).color(), Color::Black);
            assert_eq!(Card::new(Suit::Spades, rank).color(), Color::Black);
        }
    }

    #[test]
    fn ranks_are_totally_ordered() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        for (i, &rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(Rank::from_u8(i as u8), rank);
            assert_eq!(rank.number(), i as u8 + 1);
        }
    }

    #[test]
    fn short_str_and_display() {
        let ah = Card::new(Suit::Hearts, Rank::Ace);
        let td = Card::new(Suit::Diamonds, Rank::Ten);
        let ks = Card::new(Suit::Spades, Rank::King);

        assert_eq!(ah.short_str(), "AH");
        assert_eq!(format!("{td}"), "10D");
        assert_eq!(format!("{ks}"), "KS");
        assert_eq!(serde_json::to_string(&td).unwrap(), "\"10D\"");
    }

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = standard_deck();
        let mut seen = [false; DECK_LEN];
        for card in deck.iter() {
            let idx = card.index() as usize;
            assert!(!seen[idx], "duplicate card index {idx}");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn seeded_shuffle_is_reproducible_permutation() {
        let a = shuffled_deck(&mut StdRng::seed_from_u64(7));
        let b = shuffled_deck(&mut StdRng::seed_from_u64(7));
        let c = shuffled_deck(&mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut sorted = a;
        sorted.sort_by_key(|c| c.index());
        assert_eq!(sorted, standard_deck());
    }
}
