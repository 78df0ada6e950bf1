use cartomancer_core::{
    parse_cards, recommend_discards, Card, Deck, Pattern, PlanetCollection, Rank, ScoreTable,
};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("test hand parses")
}

fn deck_without(hand: &[Card]) -> Deck {
    let mut deck = Deck::standard52();
    deck.remove(hand).unwrap();
    deck
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "{a} !~ {b}");
}

#[test]
fn strong_hand_keeps_everything() {
    let hand = cards("qhqsqdqc7s");
    let deck = deck_without(&hand);
    let table = ScoreTable::base();

    let strategies = recommend_discards(&hand, &deck, &table, 5).unwrap();
    assert_eq!(strategies.len(), 1);
    let strategy = &strategies[0];
    assert_eq!(strategy.pattern, Pattern::FourOfAKind);
    assert!(strategy.discard.is_empty());
    assert_eq!(strategy.kept, hand);
    approx(strategy.probability, 1.0);
    // (60 + 4 queens at 10 chips) x 7.
    approx(strategy.expected_score, 700.0);
}

#[test]
fn boosted_pattern_with_no_better_target_keeps_everything() {
    let hand = cards("5h6d7s8c9d");
    let deck = deck_without(&hand);
    // Two Saturns push a straight to 90 chips, above every upgrade target.
    let mut planets = PlanetCollection::new();
    planets.add("Saturn", 2).unwrap();
    let table = ScoreTable::recompute(&planets.active_modifiers());

    let strategies = recommend_discards(&hand, &deck, &table, 5).unwrap();
    assert_eq!(strategies.len(), 1);
    let strategy = &strategies[0];
    assert_eq!(strategy.pattern, Pattern::Straight);
    assert!(strategy.discard.is_empty());
    assert_eq!(strategy.kept, hand);
    approx(strategy.probability, 1.0);
    // (90 + 35 card chips) x 10.
    approx(strategy.expected_score, 1250.0);
}

#[test]
fn trips_aiming_for_quads_is_a_single_draw_chance() {
    let hand = cards("khkskd2c7d");
    let mut deck = deck_without(&hand);
    // Thin the deck to 40 cards holding exactly one more king.
    deck.remove(&cards("2d2s2h3d3s3h4d")).unwrap();
    assert_eq!(deck.len(), 40);
    assert_eq!(deck.count_rank(Rank::King), 1);

    let strategies = recommend_discards(&hand, &deck, &ScoreTable::base(), 5).unwrap();
    let quads = strategies
        .iter()
        .find(|s| s.pattern == Pattern::FourOfAKind)
        .expect("quads strategy present");
    approx(quads.probability, 1.0 / 40.0);
    assert_eq!(quads.kept, cards("khkskd"));
    assert_eq!(quads.discard, cards("2c7d"));
}

#[test]
fn pair_aiming_for_trips_keeps_the_pair() {
    let hand = cards("5d5s7h3c8s");
    let deck = deck_without(&hand);

    let strategies = recommend_discards(&hand, &deck, &ScoreTable::base(), 5).unwrap();
    assert_eq!(strategies.len(), 2);

    // Trips first: 2/47 on a (30 + 10) x 3 target beats the flush chase.
    let trips = &strategies[0];
    assert_eq!(trips.pattern, Pattern::ThreeOfAKind);
    assert_eq!(trips.kept, cards("5d5s"));
    assert_eq!(trips.discard.len(), 3);
    approx(trips.probability, 2.0 / 47.0);
    approx(trips.expected_score, 120.0 * 2.0 / 47.0);

    let flush = &strategies[1];
    assert_eq!(flush.pattern, Pattern::Flush);
    assert_eq!(flush.kept, cards("5s8s"));
}

#[test]
fn open_run_sums_every_completable_window() {
    let hand = cards("5h6d7s8c2d");
    let deck = deck_without(&hand);

    let strategies = recommend_discards(&hand, &deck, &ScoreTable::base(), 5).unwrap();
    let straight = &strategies[0];
    assert_eq!(straight.pattern, Pattern::Straight);
    assert_eq!(straight.discard, cards("2d"));
    assert_eq!(straight.kept, cards("5h6d7s8c"));
    // Four fours or four nines complete the run; both windows count.
    approx(straight.probability, 8.0 / 47.0);
}

#[test]
fn two_pair_hand_chases_trips_or_flush() {
    let hand = cards("9h9d3s3c7h");
    let deck = deck_without(&hand);

    let strategies = recommend_discards(&hand, &deck, &ScoreTable::base(), 5).unwrap();
    assert_eq!(strategies.len(), 2);
    assert_eq!(strategies[0].pattern, Pattern::ThreeOfAKind);
    assert_eq!(strategies[0].kept, cards("9h9d"));
    approx(strategies[0].probability, 2.0 / 47.0);
    assert_eq!(strategies[1].pattern, Pattern::Flush);

    assert!(strategies
        .windows(2)
        .all(|pair| pair[0].expected_score >= pair[1].expected_score));
}

#[test]
fn flush_hand_has_no_reachable_upgrade() {
    // Candidates above a flush need held trips, which a one-suit hand lacks.
    let hand = cards("2h5h7h9hjh");
    let deck = deck_without(&hand);
    let strategies = recommend_discards(&hand, &deck, &ScoreTable::base(), 5).unwrap();
    assert!(strategies.is_empty());
}

#[test]
fn discard_sets_are_unique() {
    let hand = cards("9h9d3s3c7h");
    let deck = deck_without(&hand);
    let strategies = recommend_discards(&hand, &deck, &ScoreTable::base(), 5).unwrap();

    let mut seen = Vec::new();
    for strategy in &strategies {
        let mut key: Vec<_> = strategy.discard.iter().map(|c| c.sort_key()).collect();
        key.sort_unstable();
        assert!(!seen.contains(&key), "duplicate discard set");
        seen.push(key);
    }
}

#[test]
fn empty_hand_yields_no_strategies() {
    let deck = Deck::standard52();
    let strategies = recommend_discards(&[], &deck, &ScoreTable::base(), 5).unwrap();
    assert!(strategies.is_empty());
}

#[test]
fn empty_deck_yields_no_draw_strategies() {
    let hand = cards("5d5s7h3c8s");
    let mut deck = deck_without(&hand);
    let rest: Vec<Card> = deck.cards().to_vec();
    deck.remove(&rest).unwrap();

    let strategies = recommend_discards(&hand, &deck, &ScoreTable::base(), 5).unwrap();
    assert!(strategies.is_empty());
}
