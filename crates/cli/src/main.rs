use anyhow::Result;
use cartomancer_core::{
    find_best_hands, high_card_fallback, parse_cards, recommend_discards, Card, Deck,
    PlanetCollection, Rank, ScoreTable, Suit, PLANETS,
};
use colored::Colorize;
use std::io::{self, Write};

const BANNER: &str = r"
  ____          _
 / ___|__ _ _ _| |_ ___  _ __ ___   __ _ _ __   ___ ___ _ __
| |   / _` | '__| __/ _ \| '_ ` _ \ / _` | '_ \ / __/ _ \ '__|
| |__| (_| | |  | || (_) | | | | | | (_| | | | | (_|  __/ |
 \____\__,_|_|   \__\___/|_| |_| |_|\__,_|_| |_|\___\___|_|
";

struct Advisor {
    deck: Deck,
    hand: Vec<Card>,
    planets: PlanetCollection,
    table: ScoreTable,
}

impl Advisor {
    fn new() -> Self {
        Self {
            deck: Deck::standard52(),
            hand: Vec::new(),
            planets: PlanetCollection::new(),
            table: ScoreTable::base(),
        }
    }

    fn refresh_table(&mut self) {
        self.table = ScoreTable::recompute(&self.planets.active_modifiers());
    }

    /// Parse a shorthand hand, pull the newly seen cards out of the deck, and
    /// make it the current hand. User errors are reported, not fatal.
    fn enter_hand(&mut self, input: &str) -> bool {
        let cards = match parse_cards(input) {
            Ok(cards) => cards,
            Err(err) => {
                println!("\n{} {err}\n", "Error:".red());
                return false;
            }
        };
        let new_cards: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|card| !self.hand.contains(card))
            .collect();
        if let Err(err) = self.deck.remove(&new_cards) {
            println!("\n{} {err}\n", "Error:".red());
            return false;
        }
        self.hand = cards;
        self.refresh_table();
        true
    }
}

fn main() -> Result<()> {
    env_logger::init();
    println!("{}", BANNER.green());
    println!("{}", "                  Cartomancer Advisor".green());

    let mut advisor = Advisor::new();
    loop {
        println!("\n--- Main Menu ---");
        println!("1. Enter playing cards");
        println!("2. Manage planet cards");
        println!("3. Quit");
        let choice = prompt("Select an option (1-3): ")?;
        match choice.as_str() {
            "1" => {
                let input = prompt("Enter the playing cards string (e.g., ahadjc10d4s3d2s2d): ")?;
                if input.eq_ignore_ascii_case("q") {
                    break;
                }
                if advisor.enter_hand(&input) {
                    show_summary(&advisor)?;
                    if detail_loop(&mut advisor)? {
                        break;
                    }
                }
            }
            "2" => manage_planets(&mut advisor)?,
            "3" => break,
            _ => println!("Invalid choice. Please select a valid option."),
        }
    }
    println!("\nExiting. Stay sharp!\n");
    Ok(())
}

/// Inner loop after a hand was entered: detail views, or a fresh hand string.
/// Returns true when the user asked to quit outright.
fn detail_loop(advisor: &mut Advisor) -> Result<bool> {
    loop {
        println!("\nOptions:");
        println!("p    - View all play recommendations");
        println!("d    - View all discard recommendations");
        println!("deck - View the cards remaining in the deck");
        println!("m    - Back to the main menu");
        println!("q    - Quit");
        let choice = prompt("Your choice: ")?;
        match choice.as_str() {
            "p" => show_all_plays(advisor)?,
            "d" => show_all_discards(advisor)?,
            "deck" => show_deck(&advisor.deck),
            "m" => return Ok(false),
            "q" => return Ok(true),
            other => {
                if advisor.enter_hand(other) {
                    show_summary(advisor)?;
                }
            }
        }
    }
}

fn show_summary(advisor: &Advisor) -> Result<()> {
    println!("\nYour Hand: {}", format_hand(&advisor.hand));

    let best = best_play(advisor)?;
    if let Some(play) = &best {
        println!("\n>> {}", "Best Hand Recommendation:".cyan());
        println!("   Pattern: {}", play.pattern.name());
        println!("   Cards: {}", format_hand(&play.cards));
        println!("   Calculation: {}", play.calculation);
        println!("   Score: {}", play.score);
    }

    let strategies = recommend_discards(&advisor.hand, &advisor.deck, &advisor.table, 1)?;
    match strategies.first() {
        Some(strategy)
            if strategy.discard.is_empty()
                && best.as_ref().map(|play| play.pattern) == Some(strategy.pattern) =>
        {
            println!(
                "\n>> {} Play your current hand; it's already strong.",
                "Best Discard Recommendation:".magenta()
            );
        }
        Some(strategy) => {
            println!("\n>> {}", "Best Discard Recommendation:".magenta());
            println!("   Pattern to Aim For: {}", strategy.pattern.name());
            println!("   Discard: {}", format_hand(&strategy.discard));
            println!("   Kept Cards: {}", format_hand(&strategy.kept));
            println!("   Probability: {:.2}%", strategy.probability * 100.0);
        }
        None => println!("\n>> No valid discard recommendations available."),
    }

    println!("\n>> Cards Remaining in Deck: {}", advisor.deck.len());
    Ok(())
}

fn best_play(advisor: &Advisor) -> Result<Option<cartomancer_core::HandResult>> {
    let mut plays = find_best_hands(&advisor.hand, &advisor.table, 1)?;
    if plays.is_empty() {
        return Ok(high_card_fallback(&advisor.hand));
    }
    Ok(Some(plays.remove(0)))
}

fn show_all_plays(advisor: &Advisor) -> Result<()> {
    let mut plays = find_best_hands(&advisor.hand, &advisor.table, 5)?;
    if plays.is_empty() {
        plays.extend(high_card_fallback(&advisor.hand));
    }
    println!("\n>> Top Play Recommendations:");
    for (idx, play) in plays.iter().enumerate() {
        println!("\nRank {}:", idx + 1);
        println!("Pattern: {}", play.pattern.name());
        println!("Cards: {}", format_hand(&play.cards));
        println!("Calculation: {}", play.calculation);
        println!("Total Score: {}", play.score);
    }
    Ok(())
}

fn show_all_discards(advisor: &Advisor) -> Result<()> {
    let strategies = recommend_discards(&advisor.hand, &advisor.deck, &advisor.table, 5)?;
    println!("\n>> Top Discard Recommendations:");
    if strategies.is_empty() {
        println!("\nNo discard recommendations available.");
        return Ok(());
    }
    for (idx, strategy) in strategies.iter().enumerate() {
        println!("\nRank {}:", idx + 1);
        println!("Pattern to Aim For: {}", strategy.pattern.name());
        if strategy.discard.is_empty() {
            println!("Discard: None");
        } else {
            println!("Discard: {}", format_hand(&strategy.discard));
        }
        println!("Kept Cards: {}", format_hand(&strategy.kept));
        println!("Probability: {:.2}%", strategy.probability * 100.0);
        println!("Expected Score: {:.2}", strategy.expected_score);
    }
    Ok(())
}

/// Rank-by-suit table of the cards still in the deck.
fn show_deck(deck: &Deck) {
    println!("\n>> Cards Remaining in Deck: {}\n", deck.len());
    let suits = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];
    let header = format!(
        "{:<10} {}",
        "Rank",
        suits
            .iter()
            .map(|suit| &suit.name()[..3])
            .collect::<Vec<_>>()
            .join("   ")
    );
    println!("{header}");
    println!("{}", "-".repeat(header.chars().count()));
    for rank in Rank::ALL.into_iter().rev() {
        let mut row = format!("{:<10} ", rank.name());
        for suit in suits {
            let card = Card::new(rank, suit);
            let cell = if deck.contains(card) {
                card.to_string()
            } else {
                "--".to_string()
            };
            row.push_str(&format!("{cell:<6}"));
        }
        println!("{row}");
    }
}

fn manage_planets(advisor: &mut Advisor) -> Result<()> {
    loop {
        println!("\n--- Planet Cards Menu ---");
        for def in &PLANETS {
            let marker = if def.secret { " (secret)" } else { "" };
            println!(
                "{}{}: {} (boosts {})",
                def.name,
                marker,
                advisor.planets.quantity(def.name),
                def.target
            );
        }
        println!("\nType a planet name to add one (e.g., 'Earth'),");
        println!("'-' followed by a name to remove one (e.g., '-Earth'),");
        println!("or 'back' to return to the main menu.");

        let input = prompt("Your choice: ")?;
        if input.eq_ignore_ascii_case("back") {
            return Ok(());
        }
        let result = if let Some(name) = input.strip_prefix('-') {
            advisor.planets.remove(name, 1).map(|total| (name.trim().to_string(), total, "Removed"))
        } else {
            advisor.planets.add(&input, 1).map(|total| (input.clone(), total, "Added"))
        };
        match result {
            Ok((name, total, verb)) => {
                println!("{verb} one {name} card. Total now: {total}");
                advisor.refresh_table();
            }
            Err(err) => println!("{err}. Please try again."),
        }
    }
}

fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn prompt(text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
