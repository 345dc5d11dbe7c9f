//! Riffle shuffling with card orientation.
//!
//! A shuffle cuts the deck near the middle, turns the bottom packet over,
//! and riffles the two packets together in small chunks. Turning a packet
//! over is what reverses cards, so every shuffle flips one contiguous run
//! of the original deck and the reversed population is set by where the
//! random cut lands.
//!
//! The riffle itself is deterministic given the cut point and chunk
//! size; [`shuffle`] layers the randomness on top. Decks too small
//! for the cut range to vary (fewer than six cards) therefore shuffle the
//! same way every time: a two-card deck always swaps, a four-card deck
//! always exchanges its halves.
//!
//! The input slice is never mutated. Output values are clones wrapped in
//! fresh [`Oriented`] tags.

use std::cmp;

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A shuffled value tagged with its orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Oriented<T> {
    pub value: T,
    pub reversed: bool,
}

/// Shuffle a deck, producing a permutation of its values with fresh
/// orientation flags.
///
/// An empty deck stays empty and a single card comes back upright; any
/// larger deck gets cut and riffled.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use tarot::shuffle::{shuffle, Oriented};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let draw = shuffle(&[0, 1], &mut rng);
/// assert_eq!(
///     draw,
///     vec![
///         Oriented { value: 1, reversed: true },
///         Oriented { value: 0, reversed: false },
///     ],
/// );
/// ```
pub fn shuffle<T, R>(deck: &[T], rng: &mut R) -> Vec<Oriented<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if deck.len() < 2 {
        return deck
            .iter()
            .cloned()
            .map(|value| Oriented {
                value,
                reversed: false,
            })
            .collect();
    }

    let cut = rng.gen_range(cut_bounds(deck.len()));
    // How many cards fall at a time while riffling.
    let chunk_size = rng.gen_range(2..4);
    riffle(deck, cut, chunk_size)
}

/// Shuffle with a ChaCha8 generator seeded from `seed`.
///
/// Equal seeds produce equal draws, so a spread can be reproduced from
/// its seed alone.
pub fn shuffle_seeded<T: Clone>(deck: &[T], seed: u64) -> Vec<Oriented<T>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffle(deck, &mut rng)
}

/// Where the deck may be cut: within a sixth of the midpoint, and never
/// leaving either packet empty.
fn cut_bounds(len: usize) -> std::ops::Range<usize> {
    let lower = cmp::max(len / 2 - len / 6, 1);
    let upper = cmp::min(len / 2 + len / 6 + 1, len);
    lower..upper
}

/// The deterministic half of the shuffle.
///
/// Cuts `deck` at `cut`, turns the bottom packet over (tagging its cards
/// reversed), and interleaves the packets chunk by chunk with the bottom
/// packet falling first. Cards keep their order within a packet.
fn riffle<T: Clone>(deck: &[T], cut: usize, chunk_size: usize) -> Vec<Oriented<T>> {
    debug_assert!(cut > 0 && cut < deck.len());
    debug_assert!(chunk_size > 0);

    let (top, bottom) = deck.split_at(cut);
    let bottom_chunks = bottom.chunks(chunk_size).map(|chunk| (chunk, true));
    let top_chunks = top.chunks(chunk_size).map(|chunk| (chunk, false));

    bottom_chunks
        .interleave(top_chunks)
        .flat_map(|(chunk, reversed)| {
            chunk
                .iter()
                .cloned()
                .map(move |value| Oriented { value, reversed })
        })
        .collect()
}
