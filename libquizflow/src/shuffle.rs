//! Fisher-Yates shuffle
//!
//! Walks forward from the first to the second-to-last position, swapping each
//! slot with a uniformly drawn index from the unshuffled suffix (the current
//! slot included). Every one of the n! orderings is equally likely.

use rand::Rng;

/// Shuffle `items` in place. Slices of length 0 or 1 are left untouched.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    if len < 2 {
        return;
    }

    for first_unshuffled in 0..len - 1 {
        let pick = rng.gen_range(first_unshuffled..len);
        items.swap(first_unshuffled, pick);
    }
}

/// Collect `items` into a new vector in random order
pub fn shuffled<T, I, R>(items: I, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut result: Vec<T> = items.into_iter().collect();
    shuffle_in_place(&mut result, rng);
    result
}
