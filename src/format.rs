//! Display-name formatting for drawn cards.
//!
//! [`CardFormatter`] turns an [`OrientedCard`] into a label like
//! `"the 5 of Swords"` or `"XVI, the Tower (reversed)"`. Output is a pure
//! function of the card and the formatter's options.
//!
//! Reversal is only shown for kinds where orientation means something:
//! trumps and real-suit minors. Void-suit minors and extra cards never
//! grow a reversed marker, whatever their flag says.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, MajorArcana, OrientedCard, Rank, Suit};

/// How numbered minor arcana ranks are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberFormat {
    /// Arabic numerals: `"5"`, `"99"`.
    #[default]
    Numerals,
    /// Roman numerals: `"V"`, `"XCIX"`.
    Roman,
}

/// Configuration for [`CardFormatter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterOptions {
    /// Prefix trumps with their trump number in Roman numerals,
    /// as in `"XVI, the Tower"`.
    pub roman_numeral_major_arcana: bool,
    /// Numeral style for minor arcana ranks.
    pub minor_arcana_rank_format: NumberFormat,
}

/// Renders drawn cards as human-readable labels.
///
/// ```
/// use tarot::cards::{Art, Card, OrientedCard, Rank, Suit};
/// use tarot::format::CardFormatter;
///
/// let formatter = CardFormatter::default();
/// let five = Card::Minor { rank: Rank::Five, suit: Suit::Swords };
/// let label = formatter.format(&OrientedCard::upright(five, Art::SiliconDawn));
/// assert_eq!(label, "the 5 of Swords");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CardFormatter {
    options: FormatterOptions,
}

impl CardFormatter {
    /// Create a formatter with the given options.
    #[must_use]
    pub const fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    /// Render a drawn card.
    #[must_use]
    pub fn format(&self, card: &OrientedCard) -> String {
        match card.card {
            Card::Major(arcana) => self.format_major(arcana, card.reversed),
            Card::Minor { rank, suit } => self.format_minor(rank, suit, card.reversed),
            Card::Extra(color) => format!("the {} card", color.name()),
        }
    }

    fn format_major(&self, arcana: MajorArcana, reversed: bool) -> String {
        let name = if takes_article(arcana) {
            format!("the {}", arcana.name())
        } else {
            arcana.name().to_string()
        };

        let mut label = if self.options.roman_numeral_major_arcana {
            format!("{}, {}", roman_numeral(arcana.number()), name)
        } else {
            name
        };
        if reversed {
            label.push_str(" (reversed)");
        }
        label
    }

    fn format_minor(&self, rank: Rank, suit: Suit, reversed: bool) -> String {
        let mut label = format!("the {} of {}", self.rank_label(rank), suit.name());
        if reversed && suit != Suit::Void {
            label.push_str(" (reversed)");
        }
        label
    }

    fn rank_label(&self, rank: Rank) -> String {
        match rank.number() {
            Some(n) => match self.options.minor_arcana_rank_format {
                NumberFormat::Numerals => n.to_string(),
                NumberFormat::Roman => roman_numeral(n),
            },
            // Court ranks read the same in either numeral style.
            None => rank
                .court_name()
                .expect("rank without a number is a court rank")
                .to_string(),
        }
    }
}

/// Whether a trump's label carries the article, as in "the Tower" but
/// plain "Death". Fixed per trump; never inferred from the name.
const fn takes_article(arcana: MajorArcana) -> bool {
    match arcana {
        MajorArcana::Fool
        | MajorArcana::Magician
        | MajorArcana::HighPriestess
        | MajorArcana::Empress
        | MajorArcana::Emperor
        | MajorArcana::Hierophant
        | MajorArcana::Lovers
        | MajorArcana::Chariot
        | MajorArcana::Hermit
        | MajorArcana::WheelOfFortune
        | MajorArcana::HangedMan
        | MajorArcana::Devil
        | MajorArcana::Tower
        | MajorArcana::Star
        | MajorArcana::Moon
        | MajorArcana::Sun
        | MajorArcana::World => true,
        MajorArcana::Strength
        | MajorArcana::Justice
        | MajorArcana::Death
        | MajorArcana::Temperance
        | MajorArcana::Judgement => false,
    }
}

/// Subtractive Roman numerals, with `"0"` standing in for zero since the
/// classical system has no symbol for it.
fn roman_numeral(mut value: u8) -> String {
    if value == 0 {
        return "0".to_string();
    }

    const DIGITS: [(u8, &str); 9] = [
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (magnitude, digits) in DIGITS {
        while value >= magnitude {
            out.push_str(digits);
            value -= magnitude;
        }
    }
    out
}
