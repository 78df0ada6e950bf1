use crate::Modifier;
use std::collections::HashMap;
use thiserror::Error;

/// A planet card definition: each copy owned boosts one pattern's chips and
/// multiplier. Secret planets exist alongside the nine regular ones.
#[derive(Debug, Clone, Copy)]
pub struct PlanetDef {
    pub name: &'static str,
    pub target: &'static str,
    pub chip_bonus: i64,
    pub mult_bonus: f64,
    pub secret: bool,
}

pub const PLANETS: [PlanetDef; 12] = [
    PlanetDef {
        name: "Pluto",
        target: "High Card",
        chip_bonus: 10,
        mult_bonus: 1.0,
        secret: false,
    },
    PlanetDef { name: "Mercury", target: "Pair", chip_bonus: 15, mult_bonus: 1.0, secret: false },
    PlanetDef {
        name: "Uranus",
        target: "Two Pair",
        chip_bonus: 20,
        mult_bonus: 1.0,
        secret: false,
    },
    PlanetDef {
        name: "Venus",
        target: "Three of a Kind",
        chip_bonus: 20,
        mult_bonus: 2.0,
        secret: false,
    },
    PlanetDef {
        name: "Saturn",
        target: "Straight",
        chip_bonus: 30,
        mult_bonus: 3.0,
        secret: false,
    },
    PlanetDef { name: "Jupiter", target: "Flush", chip_bonus: 15, mult_bonus: 2.0, secret: false },
    PlanetDef {
        name: "Earth",
        target: "Full House",
        chip_bonus: 25,
        mult_bonus: 2.0,
        secret: false,
    },
    PlanetDef {
        name: "Mars",
        target: "Four of a Kind",
        chip_bonus: 30,
        mult_bonus: 3.0,
        secret: false,
    },
    PlanetDef {
        name: "Neptune",
        target: "Straight Flush",
        chip_bonus: 40,
        mult_bonus: 4.0,
        secret: false,
    },
    PlanetDef {
        name: "Eris",
        target: "Four of a Kind",
        chip_bonus: 50,
        mult_bonus: 5.0,
        secret: true,
    },
    PlanetDef {
        name: "Ceres",
        target: "Full House",
        chip_bonus: 45,
        mult_bonus: 4.0,
        secret: true,
    },
    PlanetDef {
        name: "Planet X",
        target: "Straight Flush",
        chip_bonus: 60,
        mult_bonus: 6.0,
        secret: true,
    },
];

#[derive(Debug, Error)]
pub enum PlanetError {
    #[error("unknown planet card '{0}'")]
    Unknown(String),
}

/// The owned planet cards. Read-only from the scoring side: it only hands out
/// the modifier list for `ScoreTable::recompute`.
#[derive(Debug, Default, Clone)]
pub struct PlanetCollection {
    quantities: HashMap<&'static str, u32>,
}

impl PlanetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(name: &str) -> Option<&'static PlanetDef> {
        let name = name.trim();
        PLANETS.iter().find(|def| def.name.eq_ignore_ascii_case(name))
    }

    /// Add copies of a planet card; returns the new total.
    pub fn add(&mut self, name: &str, quantity: u32) -> Result<u32, PlanetError> {
        let def = Self::find(name).ok_or_else(|| PlanetError::Unknown(name.to_string()))?;
        let entry = self.quantities.entry(def.name).or_insert(0);
        *entry += quantity;
        Ok(*entry)
    }

    /// Remove copies, clamping at zero; returns the new total.
    pub fn remove(&mut self, name: &str, quantity: u32) -> Result<u32, PlanetError> {
        let def = Self::find(name).ok_or_else(|| PlanetError::Unknown(name.to_string()))?;
        let entry = self.quantities.entry(def.name).or_insert(0);
        *entry = entry.saturating_sub(quantity);
        Ok(*entry)
    }

    pub fn quantity(&self, name: &str) -> u32 {
        Self::find(name)
            .and_then(|def| self.quantities.get(def.name).copied())
            .unwrap_or(0)
    }

    /// One modifier per planet with at least one copy owned, in definition
    /// order.
    pub fn active_modifiers(&self) -> Vec<Modifier> {
        PLANETS
            .iter()
            .filter_map(|def| {
                let quantity = self.quantities.get(def.name).copied().unwrap_or(0);
                if quantity == 0 {
                    return None;
                }
                Some(Modifier {
                    source: def.name.to_string(),
                    target: def.target.to_string(),
                    chip_bonus: def.chip_bonus,
                    mult_bonus: def.mult_bonus,
                    quantity,
                })
            })
            .collect()
    }
}
