//! Candidate ranking.
//!
//! The next guess is chosen greedily: tally how often every letter occurs
//! across the remaining candidates, then score each candidate as the sum of
//! the tallies of its distinct letters. The highest score wins. There is no
//! lookahead and no modeling of expected information gain; with candidate
//! sets this small the one-step heuristic is enough.

use crate::Word;
use std::cmp::Ordering;

/// Aggregate letter tally across `pool`, indexed by uppercase ascii letter.
/// Every occurrence counts, including repeats within one word.
pub fn letter_counts(pool: &[&Word]) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for word in pool {
        for &b in word.canon().as_bytes() {
            counts[(b - b'A') as usize] += 1;
        }
    }
    counts
}

/// Scores `word` against a tally: each distinct letter contributes its count
/// once, no matter how often it repeats within `word`.
fn score(word: &Word, counts: &[usize; 26]) -> usize {
    let mut seen = [false; 26];
    let mut total = 0;
    for &b in word.canon().as_bytes() {
        let i = (b - b'A') as usize;
        if !seen[i] {
            seen[i] = true;
            total += counts[i];
        }
    }
    total
}

/// Picks the highest-scoring word in `pool`. Ties resolve to the earliest
/// entry, so the choice is deterministic for a given pool order. `None` on
/// an empty pool.
pub fn best_guess<'a>(pool: &[&'a Word]) -> Option<&'a Word> {
    let counts = letter_counts(pool);
    pool.iter()
        .enumerate()
        .max_by(|(a_idx, a), (b_idx, b)| {
            match score(a, &counts).cmp(&score(b, &counts)) {
                Ordering::Equal => b_idx.cmp(a_idx),
                ord => ord,
            }
        })
        .map(|(_, word)| *word)
}
