//! The major arcana: the 22 named trump cards.
//!
//! Trumps are identified by name, not by number. The conventional trump
//! index (Fool = 0 through World = 21) is available via [`MajorArcana::number`]
//! for displays that want it, but nothing in the deck model depends on it.

use serde::{Deserialize, Serialize};

/// One of the 22 trump cards, in conventional trump order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MajorArcana {
    Fool,
    Magician,
    HighPriestess,
    Empress,
    Emperor,
    Hierophant,
    Lovers,
    Chariot,
    Strength,
    Hermit,
    WheelOfFortune,
    Justice,
    HangedMan,
    Death,
    Temperance,
    Devil,
    Tower,
    Star,
    Moon,
    Sun,
    Judgement,
    World,
}

impl MajorArcana {
    /// All 22 trumps in trump order.
    pub const ALL: [MajorArcana; 22] = [
        MajorArcana::Fool,
        MajorArcana::Magician,
        MajorArcana::HighPriestess,
        MajorArcana::Empress,
        MajorArcana::Emperor,
        MajorArcana::Hierophant,
        MajorArcana::Lovers,
        MajorArcana::Chariot,
        MajorArcana::Strength,
        MajorArcana::Hermit,
        MajorArcana::WheelOfFortune,
        MajorArcana::Justice,
        MajorArcana::HangedMan,
        MajorArcana::Death,
        MajorArcana::Temperance,
        MajorArcana::Devil,
        MajorArcana::Tower,
        MajorArcana::Star,
        MajorArcana::Moon,
        MajorArcana::Sun,
        MajorArcana::Judgement,
        MajorArcana::World,
    ];

    /// The conventional trump index, Fool = 0 through World = 21.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The display name, without any article.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MajorArcana::Fool => "Fool",
            MajorArcana::Magician => "Magician",
            MajorArcana::HighPriestess => "High Priestess",
            MajorArcana::Empress => "Empress",
            MajorArcana::Emperor => "Emperor",
            MajorArcana::Hierophant => "Hierophant",
            MajorArcana::Lovers => "Lovers",
            MajorArcana::Chariot => "Chariot",
            MajorArcana::Strength => "Strength",
            MajorArcana::Hermit => "Hermit",
            MajorArcana::WheelOfFortune => "Wheel of Fortune",
            MajorArcana::Justice => "Justice",
            MajorArcana::HangedMan => "Hanged Man",
            MajorArcana::Death => "Death",
            MajorArcana::Temperance => "Temperance",
            MajorArcana::Devil => "Devil",
            MajorArcana::Tower => "Tower",
            MajorArcana::Star => "Star",
            MajorArcana::Moon => "Moon",
            MajorArcana::Sun => "Sun",
            MajorArcana::Judgement => "Judgement",
            MajorArcana::World => "World",
        }
    }
}

impl std::fmt::Display for MajorArcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trump_count() {
        assert_eq!(MajorArcana::ALL.len(), 22);
    }

    #[test]
    fn test_numbers_follow_trump_order() {
        assert_eq!(MajorArcana::Fool.number(), 0);
        assert_eq!(MajorArcana::Strength.number(), 8);
        assert_eq!(MajorArcana::Death.number(), 13);
        assert_eq!(MajorArcana::World.number(), 21);

        for (i, arcana) in MajorArcana::ALL.iter().enumerate() {
            assert_eq!(arcana.number() as usize, i);
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(format!("{}", MajorArcana::WheelOfFortune), "Wheel of Fortune");
        assert_eq!(format!("{}", MajorArcana::HighPriestess), "High Priestess");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&MajorArcana::Tower).unwrap();
        let back: MajorArcana = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MajorArcana::Tower);
    }
}
