//! # tarot
//!
//! Deck modeling for a tarot reading application: pile construction,
//! riffle shuffling with card orientation, and display-name formatting.
//!
//! ## Design Principles
//!
//! 1. **Pure functions over immutable inputs**: shuffling and formatting
//!    never mutate what they are given and hold no hidden state. Calls
//!    are safe from any number of threads without coordination.
//!
//! 2. **Caller-supplied randomness**: anything randomized takes
//!    `&mut R where R: Rng`. Seeded ChaCha8 entry points are provided
//!    for reproducible draws.
//!
//! 3. **Closed card model**: cards are enums, so a card outside the deck
//!    model is unrepresentable rather than an error case.
//!
//! ## Modules
//!
//! - `cards`: the card data model (trumps, ranks, suits, extras, orientation)
//! - `shuffle`: riffle shuffling with orientation tagging
//! - `format`: human-readable card labels
//! - `pile`: deck construction and dealing
//!
//! ## Example
//!
//! ```
//! use tarot::{Art, CardFormatter, Pile};
//!
//! let pile = Pile::silicon_dawn();
//! let spread = pile.deal_seeded(Art::SiliconDawn, 42);
//! let formatter = CardFormatter::default();
//!
//! // Same seed, same spread, same labels.
//! assert_eq!(
//!     formatter.format(&spread[0]),
//!     formatter.format(&pile.deal_seeded(Art::SiliconDawn, 42)[0]),
//! );
//! ```

pub mod cards;
pub mod format;
pub mod pile;
pub mod shuffle;

// Re-export commonly used types
pub use crate::cards::{Art, Card, Color, MajorArcana, OrientedCard, Rank, Suit};
pub use crate::format::{CardFormatter, FormatterOptions, NumberFormat};
pub use crate::pile::Pile;
pub use crate::shuffle::{shuffle, shuffle_seeded, Oriented};
