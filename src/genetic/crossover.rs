//! Two-point crossover on variable-length individuals
//!
//! Cut points are drawn within the shorter parent, and the slice between
//! them is swapped, so both parents keep their lengths. Individuals shorter
//! than two characters cannot host two cut points; the operator is a no-op
//! for such pairs.

use rand::Rng;

use crate::message::Message;

/// Swap the segment between two random cut points of `a` and `b` in place.
///
/// Returns `true` if a swap happened (the pair was long enough).
pub fn two_point<R: Rng + ?Sized>(a: &mut Message, b: &mut Message, rng: &mut R) -> bool {
    let size = a.len().min(b.len());
    if size < 2 {
        return false;
    }

    // cut1 in 1..=size, cut2 in 1..size, bumped past cut1 to guarantee a
    // non-empty segment with cut1 < cut2
    let mut cut1 = rng.gen_range(1..=size);
    let mut cut2 = rng.gen_range(1..size);
    if cut2 >= cut1 {
        cut2 += 1;
    } else {
        std::mem::swap(&mut cut1, &mut cut2);
    }

    a.chars_mut()[cut1..cut2].swap_with_slice(&mut b.chars_mut()[cut1..cut2]);
    true
}
