use cartomancer_core::{
    parse_cards, score_pattern, Modifier, Pattern, PlanetCollection, ScoreTable,
};

fn modifier(target: &str, chip_bonus: i64, mult_bonus: f64, quantity: u32) -> Modifier {
    Modifier {
        source: "test".to_string(),
        target: target.to_string(),
        chip_bonus,
        mult_bonus,
        quantity,
    }
}

#[test]
fn base_table_matches_the_fixed_values() {
    let table = ScoreTable::base();
    assert_eq!(table.entry(Pattern::HighCard).unwrap(), (5, 1.0));
    assert_eq!(table.entry(Pattern::TwoPair).unwrap(), (20, 2.0));
    assert_eq!(table.entry(Pattern::FourOfAKind).unwrap(), (60, 7.0));
    assert_eq!(table.entry(Pattern::RoyalFlush).unwrap(), (100, 8.0));
}

#[test]
fn two_pair_scenario_scores_sixty() {
    let hand = parse_cards("2d2s3d3s").unwrap();
    let scored = score_pattern(Pattern::TwoPair, &hand, &ScoreTable::base()).unwrap();
    assert_eq!(scored.score, 60);
    assert_eq!(scored.calculation, "(20 + 10) x 2 = 60");
}

#[test]
fn royal_flush_scenario_scores_1208() {
    let hand = parse_cards("10sjsqsksas").unwrap();
    let scored = score_pattern(Pattern::RoyalFlush, &hand, &ScoreTable::base()).unwrap();
    assert_eq!(scored.score, 1208);
}

#[test]
fn score_is_monotonic_in_card_chips() {
    let table = ScoreTable::base();
    let low = parse_cards("2d2s").unwrap();
    let high = parse_cards("kdks").unwrap();
    let low_score = score_pattern(Pattern::Pair, &low, &table).unwrap().score;
    let high_score = score_pattern(Pattern::Pair, &high, &table).unwrap().score;
    assert!(high_score > low_score);
}

#[test]
fn recompute_applies_per_unit_bonuses() {
    let table = ScoreTable::recompute(&[modifier("Four of a Kind", 30, 3.0, 2)]);
    assert_eq!(table.entry(Pattern::FourOfAKind).unwrap(), (120, 13.0));
    // Other entries stay at base.
    assert_eq!(table.entry(Pattern::Pair).unwrap(), (10, 2.0));
}

#[test]
fn recompute_is_idempotent() {
    let modifiers = vec![
        modifier("Straight", 30, 3.0, 1),
        modifier("Straight", 30, 3.0, 2),
    ];
    let once = ScoreTable::recompute(&modifiers);
    let twice = ScoreTable::recompute(&modifiers);
    assert_eq!(once, twice);
    assert_eq!(once.entry(Pattern::Straight).unwrap(), (120, 13.0));
}

#[test]
fn unknown_modifier_target_is_skipped() {
    let table = ScoreTable::recompute(&[modifier("Five of a Kind", 100, 10.0, 3)]);
    assert_eq!(table, ScoreTable::base());
}

#[test]
fn zero_quantity_modifiers_are_inactive() {
    let table = ScoreTable::recompute(&[modifier("Flush", 15, 2.0, 0)]);
    assert_eq!(table, ScoreTable::base());
}

#[test]
fn planet_collection_counts_and_clamps() {
    let mut planets = PlanetCollection::new();
    assert_eq!(planets.add("earth", 1).unwrap(), 1);
    assert_eq!(planets.add("Earth", 1).unwrap(), 2);
    assert_eq!(planets.remove("EARTH", 1).unwrap(), 1);
    assert_eq!(planets.remove("Earth", 5).unwrap(), 0);
    assert!(planets.add("Vulcan", 1).is_err());
}

#[test]
fn planet_bonuses_flow_into_the_table() {
    let mut planets = PlanetCollection::new();
    planets.add("Earth", 2).unwrap();
    planets.add("Ceres", 1).unwrap();

    let modifiers = planets.active_modifiers();
    assert_eq!(modifiers.len(), 2);

    // Full House: 40 + 25*2 + 45 chips, 4 + 2*2 + 4 mult.
    let table = ScoreTable::recompute(&modifiers);
    assert_eq!(table.entry(Pattern::FullHouse).unwrap(), (135, 12.0));
}

#[test]
fn pattern_names_round_trip() {
    for pattern in Pattern::ALL {
        assert_eq!(Pattern::from_name(pattern.name()), Some(pattern));
    }
    assert_eq!(Pattern::from_name("full house"), Some(Pattern::FullHouse));
    assert_eq!(Pattern::from_name("Five of a Kind"), None);
}
