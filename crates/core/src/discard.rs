use crate::pattern::{ordered_rank_counts, ordered_suit_counts};
use crate::{
    evaluate, score_pattern, Card, Deck, Pattern, PatternMatch, ScoreError, ScoreTable, Suit,
};
use std::cmp::Ordering;
use std::collections::HashSet;

/// A recommended discard: which cards to let go, which to keep, the pattern
/// aimed for, the completion probability, and the probability-weighted score.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscardStrategy {
    pub pattern: Pattern,
    pub discard: Vec<Card>,
    pub kept: Vec<Card>,
    pub probability: f64,
    pub expected_score: f64,
    pub calculation: String,
}

/// Patterns strong enough that redrawing is never worth the risk.
const STRONG: [Pattern; 4] = [
    Pattern::RoyalFlush,
    Pattern::StraightFlush,
    Pattern::FourOfAKind,
    Pattern::FullHouse,
];

/// Reachable targets, strongest first. Filtered against the current best
/// pattern's chip value before any probability work.
const CANDIDATES: [Pattern; 6] = [
    Pattern::FourOfAKind,
    Pattern::FullHouse,
    Pattern::Flush,
    Pattern::ThreeOfAKind,
    Pattern::TwoPair,
    Pattern::Straight,
];

/// Rank discard strategies for `hand` against the remaining `deck` by
/// expected score. The deck must already exclude every card in the hand.
pub fn recommend_discards(
    hand: &[Card],
    deck: &Deck,
    table: &ScoreTable,
    top_n: usize,
) -> Result<Vec<DiscardStrategy>, ScoreError> {
    let matches = evaluate(hand);
    let Some(best) = first_best(&matches, table) else {
        return Ok(Vec::new());
    };

    if STRONG.contains(&best.pattern) {
        return Ok(vec![keep_everything(best, hand, table)?]);
    }

    let current_chips = table.chips(best.pattern);
    let candidates: Vec<Pattern> = CANDIDATES
        .into_iter()
        .filter(|candidate| table.chips(*candidate) > current_chips)
        .collect();
    if candidates.is_empty() {
        return Ok(vec![keep_everything(best, hand, table)?]);
    }

    let mut strategies = Vec::new();
    for candidate in candidates {
        let Some((kept, discard)) = keep_for(candidate, hand) else {
            continue;
        };
        let probability = completion_probability(&kept, candidate, deck, discard.len());
        if probability <= 0.0 {
            continue;
        }
        let scored = score_pattern(candidate, &kept, table)?;
        strategies.push(DiscardStrategy {
            pattern: candidate,
            discard,
            kept,
            probability,
            expected_score: probability * scored.score as f64,
            calculation: scored.calculation,
        });
    }

    strategies.sort_by(|a, b| {
        b.expected_score
            .partial_cmp(&a.expected_score)
            .unwrap_or(Ordering::Equal)
    });

    let mut seen: HashSet<Vec<(u8, u8)>> = HashSet::new();
    let mut top = Vec::new();
    for strategy in strategies {
        let mut key: Vec<(u8, u8)> = strategy.discard.iter().map(|c| c.sort_key()).collect();
        key.sort_unstable();
        if seen.insert(key) {
            top.push(strategy);
            if top.len() >= top_n {
                break;
            }
        }
    }
    Ok(top)
}

/// First match with the maximal table chip value, so ties keep the
/// evaluator's enumeration order.
fn first_best<'a>(matches: &'a [PatternMatch], table: &ScoreTable) -> Option<&'a PatternMatch> {
    let mut best: Option<&PatternMatch> = None;
    for candidate in matches {
        match best {
            Some(current) if table.chips(candidate.pattern) <= table.chips(current.pattern) => {}
            _ => best = Some(candidate),
        }
    }
    best
}

fn keep_everything(
    best: &PatternMatch,
    hand: &[Card],
    table: &ScoreTable,
) -> Result<DiscardStrategy, ScoreError> {
    let scored = score_pattern(best.pattern, &best.cards, table)?;
    Ok(DiscardStrategy {
        pattern: best.pattern,
        discard: Vec::new(),
        kept: hand.to_vec(),
        probability: 1.0,
        expected_score: scored.score as f64,
        calculation: scored.calculation,
    })
}

/// Split the hand into (kept, discard) for the candidate pattern, keeping the
/// partial structure that most directly extends into it. `None` when the hand
/// holds nothing to build on.
fn keep_for(candidate: Pattern, hand: &[Card]) -> Option<(Vec<Card>, Vec<Card>)> {
    let rank_counts = ordered_rank_counts(hand);
    match candidate {
        Pattern::FourOfAKind => {
            let three = first_value_with(&rank_counts, 3)?;
            let kept: Vec<Card> = cards_of_value(hand, three).into_iter().take(3).collect();
            Some(split_rest(hand, kept))
        }
        Pattern::FullHouse => {
            let three = first_value_with(&rank_counts, 3)?;
            let mut kept = cards_of_value(hand, three);
            let pair = rank_counts
                .iter()
                .find(|(value, count)| *count >= 2 && *value != three)
                .map(|(value, _)| *value);
            if let Some(pair) = pair {
                kept.extend(cards_of_value(hand, pair));
            }
            Some(split_rest(hand, kept))
        }
        Pattern::Flush => {
            let (suit, _) = most_common_suit(hand)?;
            let kept: Vec<Card> = hand.iter().copied().filter(|c| c.suit == suit).collect();
            Some(split_rest(hand, kept))
        }
        Pattern::ThreeOfAKind => {
            let pair = first_value_with(&rank_counts, 2)?;
            let kept: Vec<Card> = cards_of_value(hand, pair).into_iter().take(2).collect();
            Some(split_rest(hand, kept))
        }
        Pattern::TwoPair => {
            let pairs: Vec<u8> = rank_counts
                .iter()
                .filter(|(_, count)| *count >= 2)
                .map(|(value, _)| *value)
                .collect();
            if pairs.len() < 2 {
                return None;
            }
            let kept: Vec<Card> = hand
                .iter()
                .copied()
                .filter(|c| pairs[..2].contains(&c.rank.order()))
                .collect();
            Some(split_rest(hand, kept))
        }
        Pattern::Straight => {
            let held: Vec<u8> = rank_counts.iter().map(|(value, _)| *value).collect();
            let window = best_overlap_window(&held)?;
            let kept: Vec<Card> = hand
                .iter()
                .copied()
                .filter(|c| window.contains(&c.rank.order()))
                .collect();
            Some(split_rest(hand, kept))
        }
        _ => None,
    }
}

/// Probability of completing `candidate` with exactly `num_draws` cards drawn
/// as one batch from `deck`, given the kept cards. Combinatorics use the deck
/// as it stands; the hand's cards must already be removed from it.
fn completion_probability(kept: &[Card], candidate: Pattern, deck: &Deck, num_draws: usize) -> f64 {
    let total = deck.len();
    if total == 0 {
        return 0.0;
    }
    let kept_counts = ordered_rank_counts(kept);
    let deck_counts = ordered_rank_counts(deck.cards());

    match candidate {
        Pattern::FourOfAKind => match first_value_with_exact(&kept_counts, 3) {
            Some(_) => 1.0 / total as f64,
            None => 0.0,
        },
        Pattern::ThreeOfAKind => match first_value_with_exact(&kept_counts, 2) {
            Some(_) => 2.0 / total as f64,
            None => 0.0,
        },
        Pattern::FullHouse => {
            if first_value_with(&kept_counts, 3).is_some() {
                // Pair up the held trips: any rank with two copies left.
                if num_draws < 2 {
                    return 0.0;
                }
                deck_counts
                    .iter()
                    .filter(|(_, count)| *count >= 2)
                    .map(|(_, count)| choose(*count, 2) / choose(total, 2))
                    .sum()
            } else {
                // No trips held: the first rank with three copies left.
                if num_draws < 3 {
                    return 0.0;
                }
                deck_counts
                    .iter()
                    .find(|(_, count)| *count >= 3)
                    .map(|(_, count)| choose(*count, 3) / choose(total, 3))
                    .unwrap_or(0.0)
            }
        }
        Pattern::Flush => {
            let Some((suit, held)) = most_common_suit(kept) else {
                return 0.0;
            };
            if held >= 5 {
                return 1.0;
            }
            let needed = 5 - held;
            let remaining = deck.count_suit(suit);
            if remaining < needed || total < needed {
                return 0.0;
            }
            choose(remaining, needed) / choose(total, needed)
        }
        Pattern::TwoPair => {
            let held_pairs: Vec<u8> = kept_counts
                .iter()
                .filter(|(_, count)| *count >= 2)
                .map(|(value, _)| *value)
                .collect();
            if held_pairs.is_empty() || num_draws < 2 {
                return 0.0;
            }
            deck_counts
                .iter()
                .filter(|(value, count)| *count >= 2 && !held_pairs.contains(value))
                .map(|(_, count)| choose(*count, 2) / choose(total, 2))
                .sum()
        }
        Pattern::Straight => {
            let held: HashSet<u8> = kept.iter().map(|c| c.rank.order()).collect();
            let mut probability = 0.0;
            // Overlapping windows are summed without union correction; the
            // double counting is an accepted approximation.
            for window in completable_windows(&held) {
                let missing: Vec<u8> = window
                    .iter()
                    .copied()
                    .filter(|value| !held.contains(value))
                    .collect();
                if missing.len() > num_draws {
                    continue;
                }
                let pool = deck
                    .cards()
                    .iter()
                    .filter(|card| missing.contains(&card.rank.order()))
                    .count();
                if pool < missing.len() {
                    continue;
                }
                probability += choose(pool, missing.len()) / choose(total, missing.len());
            }
            probability
        }
        _ => 0.0,
    }
}

/// Windows of five consecutive order values that the kept ranks fit inside,
/// plus the Ace-low window when every one of its ranks is already held.
fn completable_windows(held: &HashSet<u8>) -> Vec<Vec<u8>> {
    let mut windows = Vec::new();
    for start in 2u8..=10 {
        let window: Vec<u8> = (start..start + 5).collect();
        if held.iter().all(|value| window.contains(value)) {
            windows.push(window);
        }
    }
    let ace_low = [14u8, 2, 3, 4, 5];
    if ace_low.iter().all(|value| held.contains(value)) {
        windows.push(ace_low.to_vec());
    }
    windows
}

/// The five-long window with the largest overlap with the held ranks; ties go
/// to the lowest window. The Ace-low window competes only when complete.
fn best_overlap_window(held: &[u8]) -> Option<Vec<u8>> {
    let mut windows: Vec<Vec<u8>> = Vec::new();
    for start in 2u8..=10 {
        let window: Vec<u8> = (start..start + 5).collect();
        if window.iter().any(|value| held.contains(value)) {
            windows.push(window);
        }
    }
    let ace_low = [14u8, 2, 3, 4, 5];
    if ace_low.iter().all(|value| held.contains(value)) {
        windows.push(ace_low.to_vec());
    }

    let mut best: Option<(usize, Vec<u8>)> = None;
    for window in windows {
        let overlap = window.iter().filter(|value| held.contains(value)).count();
        if best.as_ref().map_or(true, |(top, _)| overlap > *top) {
            best = Some((overlap, window));
        }
    }
    best.map(|(_, window)| window)
}

/// Exact binomial coefficient, as f64 for the probability ratios. Inputs stay
/// tiny (n <= 52) so the incremental product is exact enough.
fn choose(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

fn first_value_with(counts: &[(u8, usize)], at_least: usize) -> Option<u8> {
    counts
        .iter()
        .find(|(_, count)| *count >= at_least)
        .map(|(value, _)| *value)
}

fn first_value_with_exact(counts: &[(u8, usize)], exactly: usize) -> Option<u8> {
    counts
        .iter()
        .find(|(_, count)| *count == exactly)
        .map(|(value, _)| *value)
}

fn cards_of_value(hand: &[Card], value: u8) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|card| card.rank.order() == value)
        .collect()
}

fn most_common_suit(cards: &[Card]) -> Option<(Suit, usize)> {
    let mut best: Option<(Suit, usize)> = None;
    for (suit, count) in ordered_suit_counts(cards) {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((suit, count));
        }
    }
    best
}

fn split_rest(hand: &[Card], kept: Vec<Card>) -> (Vec<Card>, Vec<Card>) {
    let discard: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|card| !kept.contains(card))
        .collect();
    (kept, discard)
}
