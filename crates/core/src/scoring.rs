use crate::{Card, Pattern};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// An external bonus source (collectible). Each active copy adds
/// `chip_bonus`/`mult_bonus` to its target pattern's table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    pub source: String,
    pub target: String,
    pub chip_bonus: i64,
    pub mult_bonus: f64,
    pub quantity: u32,
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("pattern '{0}' missing from the score table")]
    MissingPattern(&'static str),
}

/// Pattern name to (chips, multiplier). Always derived from the base table
/// plus the current modifier list; it carries no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    entries: HashMap<Pattern, (i64, f64)>,
}

impl ScoreTable {
    pub fn base() -> Self {
        let mut entries = HashMap::new();
        for pattern in Pattern::ALL {
            entries.insert(pattern, base_entry(pattern));
        }
        Self { entries }
    }

    /// Rebuild the table from the base values plus the supplied modifiers.
    /// A modifier naming an unknown pattern is logged and skipped.
    pub fn recompute(modifiers: &[Modifier]) -> Self {
        let mut table = Self::base();
        for modifier in modifiers {
            if modifier.quantity == 0 {
                continue;
            }
            let Some(pattern) = Pattern::from_name(&modifier.target) else {
                log::warn!(
                    "modifier '{}' targets unknown pattern '{}', skipped",
                    modifier.source,
                    modifier.target
                );
                continue;
            };
            if let Some((chips, mult)) = table.entries.get_mut(&pattern) {
                let quantity = modifier.quantity as i64;
                *chips += modifier.chip_bonus * quantity;
                *mult += modifier.mult_bonus * quantity as f64;
            }
        }
        table
    }

    pub fn entry(&self, pattern: Pattern) -> Result<(i64, f64), ScoreError> {
        self.entries
            .get(&pattern)
            .copied()
            .ok_or(ScoreError::MissingPattern(pattern.name()))
    }

    /// Chip component only, defaulting to zero; used for comparing pattern
    /// strength when ranking discard candidates.
    pub fn chips(&self, pattern: Pattern) -> i64 {
        self.entries.get(&pattern).map(|(chips, _)| *chips).unwrap_or(0)
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::base()
    }
}

/// A scored pattern: the numeric result and its derivation for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub score: i64,
    pub calculation: String,
}

/// Score `pattern` realized by `cards`:
/// `(table chips + sum of card chip values) x table multiplier`.
pub fn score_pattern(
    pattern: Pattern,
    cards: &[Card],
    table: &ScoreTable,
) -> Result<Scored, ScoreError> {
    let (chips, mult) = table.entry(pattern)?;
    let card_chips: i64 = cards.iter().map(|card| card.rank.chips()).sum();
    let score = ((chips + card_chips) as f64 * mult).floor() as i64;
    let calculation = format!("({chips} + {card_chips}) x {mult} = {score}");
    Ok(Scored { score, calculation })
}

fn base_entry(pattern: Pattern) -> (i64, f64) {
    match pattern {
        Pattern::HighCard => (5, 1.0),
        Pattern::Pair => (10, 2.0),
        Pattern::TwoPair => (20, 2.0),
        Pattern::ThreeOfAKind => (30, 3.0),
        Pattern::Straight => (30, 4.0),
        Pattern::Flush => (35, 4.0),
        Pattern::FullHouse => (40, 4.0),
        Pattern::FourOfAKind => (60, 7.0),
        Pattern::StraightFlush | Pattern::RoyalFlush => (100, 8.0),
    }
}
