//! Levenshtein edit distance
//!
//! **Problem**: fitness evaluation dominates the evolution loop; a naive
//! recursive edit distance is O(3^n).
//!
//! **Solution**: Wagner-Fischer dynamic programming with a two-row rolling
//! buffer - O(n*m) time, O(min(n,m)) space, no allocation beyond one row.
//!
//! Unit insert/delete/substitute costs; distance 0 iff the strings are equal.

/// Levenshtein distance between two byte strings.
///
/// # Examples
///
/// ```rust
/// use criar::distance::levenshtein;
///
/// assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
/// assert_eq!(levenshtein(b"catch", b"match"), 1);
/// ```
#[must_use]
pub fn levenshtein(a: &[u8], b: &[u8]) -> u32 {
    // Keep the shorter string in the inner dimension so the rolling row
    // stays small.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return u32::try_from(long.len()).unwrap_or(u32::MAX);
    }

    // prev[j] = distance between long[..i] and short[..j]
    let mut prev: Vec<u32> = (0..=u32::try_from(short.len()).unwrap_or(u32::MAX)).collect();
    let mut curr: Vec<u32> = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = u32::try_from(i).unwrap_or(u32::MAX) + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitution = prev[j] + u32::from(lc != sc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Levenshtein distance between two `&str` values, over bytes.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> u32 {
    levenshtein(a.as_bytes(), b.as_bytes())
}
