//! Top-N sentence selection for summarization
//!
//! Picks the highest scoring sentences and hands them back in document
//! order. Selection works on sentence positions, never on sentence text, so
//! two sentences with identical wording are treated as different sentences.

use std::cmp::Reverse;

/// Returns the positions of the `n` highest scores, in ascending position order.
///
/// Candidates are ranked by `(-score, position)`: among equal scores the
/// earlier sentence wins. At most `n` positions are returned and none twice.
pub fn select_top(scores: &[usize], n: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by_key(|&i| (Reverse(scores[i]), i));
    ranked.truncate(n);

    // Back to document order
    ranked.sort_unstable();
    ranked
}
