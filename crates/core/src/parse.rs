use crate::{Card, Rank, Suit};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no valid cards found in the input")]
    Empty,
    #[error("invalid rank character '{0}'")]
    BadRank(char),
    #[error("invalid suit character '{0}', use H, D, S, or C")]
    BadSuit(char),
    #[error("rank '{0}' has no suit")]
    MissingSuit(&'static str),
    #[error("duplicate card '{0}' detected")]
    Duplicate(Card),
}

/// Parse a shorthand hand string such as `ah kh qh jh 10h` or `7h10h2s3dah9c`
/// into a duplicate-free card list. Whitespace and commas separate tokens but
/// are not required.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, ParseError> {
    let mut cards: Vec<Card> = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() || ch == ',' {
            continue;
        }
        let rank = match ch.to_ascii_uppercase() {
            'A' => Rank::Ace,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            '1' => {
                // Only "10" starts with a one.
                match chars.next() {
                    Some('0') => Rank::Ten,
                    _ => return Err(ParseError::BadRank(ch)),
                }
            }
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            other => return Err(ParseError::BadRank(other)),
        };
        let suit_ch = chars.next().ok_or(ParseError::MissingSuit(rank.name()))?;
        let suit = match suit_ch.to_ascii_uppercase() {
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'S' => Suit::Spades,
            'C' => Suit::Clubs,
            other => return Err(ParseError::BadSuit(other)),
        };
        let card = Card::new(rank, suit);
        if cards.contains(&card) {
            return Err(ParseError::Duplicate(card));
        }
        cards.push(card);
    }

    if cards.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(cards)
}
