//! The card data model.
//!
//! A [`Card`] is one of three kinds:
//!
//! - `Major`: one of the 22 named trumps
//! - `Minor`: a rank in a suit
//! - `Extra`: the variant deck's non-arcana cards, identified by color
//!
//! An [`OrientedCard`] is a card as actually drawn: the card itself, an
//! orientation flag, and an [`Art`] selector that the rendering layer uses
//! to pick an image set. Nothing in this crate interprets the art selector.

mod arcana;
mod minor;

pub use arcana::MajorArcana;
pub use minor::{Rank, Suit};

use serde::{Deserialize, Serialize};

/// Color of an extra (non-arcana) card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which image set the rendering layer should draw a card from.
///
/// Carried through untouched by shuffling and formatting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Art {
    #[default]
    RiderWaite,
    SiliconDawn,
}

/// A single card, without orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    /// A trump.
    Major(MajorArcana),
    /// A suited, ranked card.
    Minor { rank: Rank, suit: Suit },
    /// A non-arcana card from the variant deck.
    Extra(Color),
}

/// A card as drawn: card, orientation, and art selector.
///
/// Orientation only affects display for orientation-sensitive kinds;
/// Void-suit minors and extra cards ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrientedCard {
    pub card: Card,
    pub reversed: bool,
    pub art: Art,
}

impl OrientedCard {
    /// A card drawn upright.
    #[must_use]
    pub const fn upright(card: Card, art: Art) -> Self {
        Self {
            card,
            reversed: false,
            art,
        }
    }

    /// A card drawn upside-down.
    #[must_use]
    pub const fn reversed(card: Card, art: Art) -> Self {
        Self {
            card,
            reversed: true,
            art,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let card = Card::Minor {
            rank: Rank::Five,
            suit: Suit::Swords,
        };

        assert!(!OrientedCard::upright(card, Art::SiliconDawn).reversed);
        assert!(OrientedCard::reversed(card, Art::SiliconDawn).reversed);
    }

    #[test]
    fn test_oriented_card_serialization() {
        let drawn = OrientedCard::reversed(Card::Major(MajorArcana::Tower), Art::SiliconDawn);

        let json = serde_json::to_string(&drawn).unwrap();
        let back: OrientedCard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, drawn);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
    }
}
