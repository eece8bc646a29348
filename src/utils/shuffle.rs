//! # Shuffle Module
//!
//! Random permutations used to vary the search order between runs.
//!
//! ## Example Function: `shuffled`
//!
//! `shuffled` copies a slice into a new `Vec` in uniformly random order. The
//! random source is passed in so callers can seed it for reproducible output.

use rand::Rng;

/// Returns the elements of `items` in a uniformly random order.
///
/// Indices are drawn without replacement from a shrinking pool, so every
/// element appears exactly once. The input is left untouched.
///
/// # Examples
///
/// ```
/// use dungeon_gen::utils::shuffled;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut out = shuffled(&[1, 2, 3, 4], &mut rng);
/// out.sort();
/// assert_eq!(out, vec![1, 2, 3, 4]);
/// ```
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut pool: Vec<usize> = (0..items.len()).collect();
    let mut out = Vec::with_capacity(items.len());
    while !pool.is_empty() {
        let pick = rng.random_range(0..pool.len());
        let index = pool.swap_remove(pick);
        out.push(items[index].clone());
    }
    out
}
