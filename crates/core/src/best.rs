use crate::{evaluate, score_pattern, Card, Pattern, ScoreError, ScoreTable};
use std::collections::HashSet;

/// One play recommendation: a pattern, the cards realizing it, and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct HandResult {
    pub pattern: Pattern,
    pub cards: Vec<Card>,
    pub score: i64,
    pub calculation: String,
}

/// Score every pattern found in every 5-card subset of `hand` and return the
/// `top_n` best, deduplicated by the exact sorted set of pattern cards. The
/// subset count is C(|hand|, 5); hands stay small so brute force is fine.
pub fn find_best_hands(
    hand: &[Card],
    table: &ScoreTable,
    top_n: usize,
) -> Result<Vec<HandResult>, ScoreError> {
    let mut results: Vec<HandResult> = Vec::new();
    for indices in combinations(hand.len(), 5) {
        let subset: Vec<Card> = indices.iter().map(|&i| hand[i]).collect();
        for found in evaluate(&subset) {
            let scored = score_pattern(found.pattern, &found.cards, table)?;
            results.push(HandResult {
                pattern: found.pattern,
                cards: found.cards,
                score: scored.score,
                calculation: scored.calculation,
            });
        }
    }

    // Stable sort keeps evaluation order among equal scores.
    results.sort_by(|a, b| b.score.cmp(&a.score));

    let mut seen: HashSet<Vec<(u8, u8)>> = HashSet::new();
    let mut best = Vec::new();
    for result in results {
        let mut key: Vec<(u8, u8)> = result.cards.iter().map(|c| c.sort_key()).collect();
        key.sort_unstable();
        if seen.insert(key) {
            best.push(result);
            if best.len() >= top_n {
                break;
            }
        }
    }
    Ok(best)
}

/// Caller-side fallback for degenerate hands (fewer than five cards): the
/// single highest card by sequencing order, scored as its order value.
pub fn high_card_fallback(hand: &[Card]) -> Option<HandResult> {
    let mut best: Option<Card> = None;
    for &card in hand {
        if best.map_or(true, |b| card.rank.order() > b.rank.order()) {
            best = Some(card);
        }
    }
    best.map(|card| HandResult {
        pattern: Pattern::HighCard,
        cards: vec![card],
        score: card.rank.order() as i64,
        calculation: "High card value".to_string(),
    })
}

/// All k-element index combinations of 0..n in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut all = Vec::new();
    if k == 0 || k > n {
        return all;
    }
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        all.push(indices.clone());
        let mut i = k - 1;
        while indices[i] == i + n - k {
            if i == 0 {
                return all;
            }
            i -= 1;
        }
        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}
