//! Pile construction and dealing.
//!
//! A pile is an ordered collection of cards, built face up in a fixed
//! (but unrandomized) order. [`Pile::deal`] riffle-shuffles the pile into
//! a spread of [`OrientedCard`]s without disturbing the pile itself.

use itertools::iproduct;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Art, Card, Color, MajorArcana, OrientedCard, Rank, Suit};
use crate::shuffle::{shuffle, shuffle_seeded};

/// An ordered pile of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// The standard 78-card pile: 56 minor arcana and 22 trumps.
    #[must_use]
    pub fn standard() -> Self {
        let cards = iproduct!(Rank::STANDARD, Suit::STANDARD)
            .map(|(rank, suit)| Card::Minor { rank, suit })
            .chain(MajorArcana::ALL.map(Card::Major))
            .collect();
        Self { cards }
    }

    /// The Silicon Dawn pile: the standard 78 plus the four NinetyNines,
    /// the five (VOID) cards, and the white and black extra cards.
    #[must_use]
    pub fn silicon_dawn() -> Self {
        let ninety_nines = Suit::STANDARD.map(|suit| Card::Minor {
            rank: Rank::NinetyNine,
            suit,
        });
        let voids = [Rank::Zero, Rank::Progeny, Rank::Cavalier, Rank::Queen, Rank::King].map(
            |rank| Card::Minor {
                rank,
                suit: Suit::Void,
            },
        );
        let extras = [Card::Extra(Color::White), Card::Extra(Color::Black)];

        let mut pile = Self::standard();
        pile.cards.extend(ninety_nines);
        pile.cards.extend(voids);
        pile.cards.extend(extras);
        pile
    }

    /// The cards in pile order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle the pile into a spread, tagging every drawn card with the
    /// requested art. The pile itself is untouched.
    pub fn deal<R>(&self, art: Art, rng: &mut R) -> Vec<OrientedCard>
    where
        R: Rng + ?Sized,
    {
        shuffle(&self.cards, rng)
            .into_iter()
            .map(|drawn| OrientedCard {
                card: drawn.value,
                reversed: drawn.reversed,
                art,
            })
            .collect()
    }

    /// Like [`Pile::deal`], but seeded, so the same seed reproduces the
    /// same spread.
    #[must_use]
    pub fn deal_seeded(&self, art: Art, seed: u64) -> Vec<OrientedCard> {
        shuffle_seeded(&self.cards, seed)
            .into_iter()
            .map(|drawn| OrientedCard {
                card: drawn.value,
                reversed: drawn.reversed,
                art,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_standard_pile_count() {
        assert_eq!(Pile::standard().len(), 78);
    }

    #[test]
    fn test_silicon_dawn_pile_count() {
        assert_eq!(Pile::silicon_dawn().len(), 89);
    }

    #[test]
    fn test_standard_pile_has_no_variant_cards() {
        let pile = Pile::standard();
        for card in pile.cards() {
            match card {
                Card::Minor { rank, suit } => {
                    assert_ne!(*rank, Rank::Zero);
                    assert_ne!(*rank, Rank::NinetyNine);
                    assert_ne!(*suit, Suit::Void);
                }
                Card::Major(_) => {}
                Card::Extra(_) => panic!("extra card in the standard pile"),
            }
        }
    }

    #[test]
    fn test_silicon_dawn_void_cards() {
        let pile = Pile::silicon_dawn();
        let voids = pile
            .cards()
            .iter()
            .filter(|card| matches!(card, Card::Minor { suit: Suit::Void, .. }))
            .count();
        assert_eq!(voids, 5);
    }

    #[test]
    fn test_deal_preserves_pile_and_multiset() {
        let pile = Pile::silicon_dawn();
        let before = pile.clone();

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let spread = pile.deal(Art::SiliconDawn, &mut rng);

        assert_eq!(pile, before);
        assert_eq!(spread.len(), pile.len());

        let mut drawn: Vec<Card> = spread.iter().map(|card| card.card).collect();
        let mut original = pile.cards().to_vec();
        drawn.sort();
        original.sort();
        assert_eq!(drawn, original);
    }

    #[test]
    fn test_deal_tags_requested_art() {
        let pile = Pile::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let spread = pile.deal(Art::RiderWaite, &mut rng);
        assert!(spread.iter().all(|card| card.art == Art::RiderWaite));
    }

    #[test]
    fn test_deal_seeded_is_reproducible() {
        let pile = Pile::silicon_dawn();
        assert_eq!(
            pile.deal_seeded(Art::SiliconDawn, 11),
            pile.deal_seeded(Art::SiliconDawn, 11),
        );
    }

    #[test]
    fn test_pile_serialization() {
        let pile = Pile::silicon_dawn();
        let json = serde_json::to_string(&pile).unwrap();
        let back: Pile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pile);
    }
}
