use cartomancer_core::{parse_cards, Card, Deck, DeckError, ParseError, Rank, Suit};

#[test]
fn spaced_shorthand_parses_in_order() {
    let cards = parse_cards("ah kh qh jh 10h").unwrap();
    assert_eq!(
        cards,
        vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Hearts),
        ]
    );
}

#[test]
fn packed_shorthand_parses_without_separators() {
    let cards = parse_cards("7h10h2s3dah9c").unwrap();
    assert_eq!(cards.len(), 6);
    assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!(cards[4], Card::new(Rank::Ace, Suit::Hearts));
}

#[test]
fn commas_and_mixed_case_are_accepted() {
    let cards = parse_cards("Ah, Kd, 2C").unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[2], Card::new(Rank::Two, Suit::Clubs));
}

#[test]
fn duplicates_are_rejected() {
    let err = parse_cards("ahah").unwrap_err();
    assert_eq!(
        err,
        ParseError::Duplicate(Card::new(Rank::Ace, Suit::Hearts))
    );
}

#[test]
fn bad_characters_are_rejected() {
    assert_eq!(parse_cards("ax").unwrap_err(), ParseError::BadSuit('X'));
    assert_eq!(parse_cards("zh").unwrap_err(), ParseError::BadRank('Z'));
    // A lone one is not a rank.
    assert_eq!(parse_cards("1h").unwrap_err(), ParseError::BadRank('1'));
}

#[test]
fn trailing_rank_without_suit_is_rejected() {
    assert_eq!(parse_cards("ah k").unwrap_err(), ParseError::MissingSuit("King"));
}

#[test]
fn blank_input_is_rejected() {
    assert_eq!(parse_cards("").unwrap_err(), ParseError::Empty);
    assert_eq!(parse_cards("  , ,  ").unwrap_err(), ParseError::Empty);
}

#[test]
fn standard_deck_holds_fifty_two_cards() {
    let deck = Deck::standard52();
    assert_eq!(deck.len(), 52);
    for suit in Suit::ALL {
        assert_eq!(deck.count_suit(suit), 13);
    }
    for rank in Rank::ALL {
        assert_eq!(deck.count_rank(rank), 4);
    }
}

#[test]
fn removal_shrinks_the_deck_once() {
    let hand = parse_cards("ahadjc10d4s").unwrap();
    let mut deck = Deck::standard52();
    deck.remove(&hand).unwrap();
    assert_eq!(deck.len(), 47);
    assert!(!deck.contains(hand[0]));
    assert_eq!(deck.count_rank(Rank::Ace), 2);

    let err = deck.remove(&hand[..1]).unwrap_err();
    let DeckError::Missing(listed) = err;
    assert!(listed.contains("Ace Heart"));
    // A failed removal leaves the deck untouched.
    assert_eq!(deck.len(), 47);
}

#[test]
fn partial_removal_failure_removes_nothing() {
    let mut deck = Deck::standard52();
    let hand = parse_cards("ahad").unwrap();
    deck.remove(&hand[..1]).unwrap();

    assert!(deck.remove(&hand).is_err());
    assert_eq!(deck.len(), 51);
    assert!(deck.contains(hand[1]));
}
