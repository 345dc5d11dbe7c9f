//! Ranks and suits for the minor arcana.
//!
//! A standard suit runs One through Ten plus the four court ranks. The
//! Silicon Dawn deck adds a NinetyNine to every real suit and a small set
//! of cards in the sentinel (VOID) suit, including its Zero.

use serde::{Deserialize, Serialize};

/// Rank of a minor arcana card.
///
/// `Zero` and `NinetyNine` only occur in the variant deck; see
/// [`Rank::STANDARD`] for the ranks of a standard suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Progeny,
    Cavalier,
    Queen,
    King,
    NinetyNine,
}

impl Rank {
    /// The 14 ranks of a standard suit, low to high.
    pub const STANDARD: [Rank; 14] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Progeny,
        Rank::Cavalier,
        Rank::Queen,
        Rank::King,
    ];

    /// The numeric value of a numbered rank, `None` for court ranks.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Rank::Zero => Some(0),
            Rank::One => Some(1),
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Four => Some(4),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Seven => Some(7),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            Rank::Ten => Some(10),
            Rank::NinetyNine => Some(99),
            Rank::Progeny | Rank::Cavalier | Rank::Queen | Rank::King => None,
        }
    }

    /// The display name of a court rank, `None` for numbered ranks.
    #[must_use]
    pub const fn court_name(self) -> Option<&'static str> {
        match self {
            Rank::Progeny => Some("Progeny"),
            Rank::Cavalier => Some("Cavalier"),
            Rank::Queen => Some("Queen"),
            Rank::King => Some("King"),
            _ => None,
        }
    }
}

/// Suit of a minor arcana card.
///
/// `Void` is a sentinel suit for the variant deck's blank draws. It is
/// orientation-insensitive and renders as the literal `"(VOID)"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Cups,
    Pentacles,
    Swords,
    Wands,
    Void,
}

impl Suit {
    /// The four real suits.
    pub const STANDARD: [Suit; 4] = [Suit::Cups, Suit::Pentacles, Suit::Swords, Suit::Wands];

    /// The display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Cups => "Cups",
            Suit::Pentacles => "Pentacles",
            Suit::Swords => "Swords",
            Suit::Wands => "Wands",
            Suit::Void => "(VOID)",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
