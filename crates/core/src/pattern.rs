use crate::{Card, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Pattern {
    pub const ALL: [Pattern; 10] = [
        Pattern::HighCard,
        Pattern::Pair,
        Pattern::TwoPair,
        Pattern::ThreeOfAKind,
        Pattern::Straight,
        Pattern::Flush,
        Pattern::FullHouse,
        Pattern::FourOfAKind,
        Pattern::StraightFlush,
        Pattern::RoyalFlush,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::HighCard => "High Card",
            Pattern::Pair => "Pair",
            Pattern::TwoPair => "Two Pair",
            Pattern::ThreeOfAKind => "Three of a Kind",
            Pattern::Straight => "Straight",
            Pattern::Flush => "Flush",
            Pattern::FullHouse => "Full House",
            Pattern::FourOfAKind => "Four of a Kind",
            Pattern::StraightFlush => "Straight Flush",
            Pattern::RoyalFlush => "Royal Flush",
        }
    }

    pub fn from_name(name: &str) -> Option<Pattern> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// One pattern occurrence with the cards realizing it. The evaluator reports
/// every occurrence; deduplication happens downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub pattern: Pattern,
    pub cards: Vec<Card>,
}

/// Enumerate every poker pattern present in `cards`. High Card is emitted
/// only when nothing else matches; an empty input yields an empty result.
pub fn evaluate(cards: &[Card]) -> Vec<PatternMatch> {
    let mut matches = Vec::new();
    if cards.is_empty() {
        return matches;
    }

    // Royal flush, straight flush, and flush per suit with five or more cards.
    for (suit, count) in ordered_suit_counts(cards) {
        if count < 5 {
            continue;
        }
        let suited: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
        let values: Vec<u8> = suited.iter().map(|c| c.rank.order()).collect();
        let runs = find_runs(&values);
        for run in &runs {
            let run_cards: Vec<Card> = suited
                .iter()
                .copied()
                .filter(|c| run.contains(&c.rank.order()))
                .collect();
            let pattern = if is_royal_window(run) {
                Pattern::RoyalFlush
            } else {
                Pattern::StraightFlush
            };
            matches.push(PatternMatch {
                pattern,
                cards: run_cards,
            });
        }
        if runs.is_empty() {
            matches.push(PatternMatch {
                pattern: Pattern::Flush,
                cards: suited,
            });
        }
    }

    let rank_counts = ordered_rank_counts(cards);

    for &(value, count) in &rank_counts {
        if count == 4 {
            matches.push(PatternMatch {
                pattern: Pattern::FourOfAKind,
                cards: cards_with_values(cards, &[value]),
            });
        }
    }

    // Full house: every (three, pair) combination, where another three may
    // serve as the pair component.
    let threes: Vec<u8> = rank_counts
        .iter()
        .filter(|(_, count)| *count == 3)
        .map(|(value, _)| *value)
        .collect();
    let pairs_or_better: Vec<u8> = rank_counts
        .iter()
        .filter(|(value, count)| *count >= 2 && !threes.contains(value))
        .map(|(value, _)| *value)
        .collect();
    for &three in &threes {
        let partners = pairs_or_better
            .iter()
            .chain(threes.iter().filter(|value| **value != three));
        for &partner in partners {
            matches.push(PatternMatch {
                pattern: Pattern::FullHouse,
                cards: cards_with_values(cards, &[three, partner]),
            });
        }
    }

    let values: Vec<u8> = cards.iter().map(|c| c.rank.order()).collect();
    for run in find_runs(&values) {
        matches.push(PatternMatch {
            pattern: Pattern::Straight,
            cards: cards
                .iter()
                .copied()
                .filter(|c| run.contains(&c.rank.order()))
                .collect(),
        });
    }

    for &(value, count) in &rank_counts {
        if count == 3 {
            matches.push(PatternMatch {
                pattern: Pattern::ThreeOfAKind,
                cards: cards_with_values(cards, &[value]),
            });
        }
    }

    let pair_values: Vec<u8> = rank_counts
        .iter()
        .filter(|(_, count)| *count == 2)
        .map(|(value, _)| *value)
        .collect();
    for (i, &first) in pair_values.iter().enumerate() {
        for &second in &pair_values[i + 1..] {
            matches.push(PatternMatch {
                pattern: Pattern::TwoPair,
                cards: cards_with_values(cards, &[first, second]),
            });
        }
    }
    for &value in &pair_values {
        matches.push(PatternMatch {
            pattern: Pattern::Pair,
            cards: cards_with_values(cards, &[value]),
        });
    }

    if matches.is_empty() {
        let top = values.iter().copied().max().unwrap_or(0);
        matches.push(PatternMatch {
            pattern: Pattern::HighCard,
            cards: cards_with_values(cards, &[top]),
        });
    }

    matches
}

/// All five-long windows of consecutive order values present in `values`,
/// plus the Ace-low window when {A,2,3,4,5} is covered. Duplicate values
/// collapse; gaps never qualify.
pub(crate) fn find_runs(values: &[u8]) -> Vec<Vec<u8>> {
    let mut unique: Vec<u8> = values.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let mut runs = Vec::new();
    if unique.len() >= 5 {
        for window in unique.windows(5) {
            if window.windows(2).all(|pair| pair[1] - pair[0] == 1) {
                runs.push(window.to_vec());
            }
        }
    }
    if [14u8, 2, 3, 4, 5].iter().all(|value| unique.contains(value)) {
        runs.push(vec![14, 2, 3, 4, 5]);
    }
    runs
}

fn is_royal_window(run: &[u8]) -> bool {
    let mut sorted = run.to_vec();
    sorted.sort_unstable();
    sorted == [10, 11, 12, 13, 14]
}

fn cards_with_values(cards: &[Card], values: &[u8]) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|card| values.contains(&card.rank.order()))
        .collect()
}

/// Distinct rank order values with their counts, in first-appearance order.
/// The fixed order keeps tie-breaking deterministic across the crate.
pub(crate) fn ordered_rank_counts(cards: &[Card]) -> Vec<(u8, usize)> {
    let mut counts: Vec<(u8, usize)> = Vec::new();
    for card in cards {
        let value = card.rank.order();
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

/// Distinct suits with their counts, in first-appearance order.
pub(crate) fn ordered_suit_counts(cards: &[Card]) -> Vec<(Suit, usize)> {
    let mut counts: Vec<(Suit, usize)> = Vec::new();
    for card in cards {
        match counts.iter_mut().find(|(s, _)| *s == card.suit) {
            Some((_, count)) => *count += 1,
            None => counts.push((card.suit, 1)),
        }
    }
    counts
}
