use lib::prelude::*;
use lib::Size;

use crate::cards::{self, Card};

const CARDS: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

fn input(data: &'static str) -> IStr {
    IStr::new(data.as_bytes(), Size::ZERO)
}

fn parse(data: &'static str) -> Result<Vec<Card>> {
    cards::parse(input(data))
}

#[test]
fn sample_totals() -> Result<()> {
    let cards = parse(CARDS)?;
    assert_eq!(cards.len(), 6);
    assert_eq!(cards::total_points(&cards), 13);
    assert_eq!(cards::total_cards(&cards), 30);
    Ok(())
}

#[test]
fn sample_points() -> Result<()> {
    let cards = parse(CARDS)?;

    assert_eq!(cards[0].match_count(), 4);
    assert_eq!(cards[0].points(), 8);
    assert_eq!(cards[1].points(), 2);
    assert_eq!(cards[2].points(), 2);
    assert_eq!(cards[3].points(), 1);
    assert_eq!(cards[4].points(), 0);
    assert_eq!(cards[5].points(), 0);
    Ok(())
}

#[test]
fn duplicates_count_once() -> Result<()> {
    let cards = parse("Card 1: 5 | 5 5 5\n")?;
    assert_eq!(cards[0].match_count(), 1);

    let cards = parse("Card 1: 5 5 5 | 5\n")?;
    assert_eq!(cards[0].match_count(), 1);
    Ok(())
}

#[test]
fn points_stay_exact_past_u32() {
    let winning: Vec<u32> = (1..=40).collect();

    let card = Card {
        id: 1,
        winning: winning.clone(),
        drawn: winning,
    };

    assert_eq!(card.match_count(), 40);
    assert_eq!(card.points(), 1 << 39);
}

#[test]
fn cascade_clips_at_table_end() -> Result<()> {
    // The only card wins a copy of a card that does not exist.
    let cards = parse("Card 1: 7 | 7\n")?;
    assert_eq!(cards::total_cards(&cards), 1);
    Ok(())
}

#[test]
fn total_never_drops_originals() -> Result<()> {
    let cards = parse(CARDS)?;
    assert!(cards::total_cards(&cards) >= cards.len() as u64);
    Ok(())
}

#[test]
fn bad_prefix_is_an_error() {
    assert!(parse("Pard 1: 1 | 1\n").is_err());
}

#[test]
fn malformed_line_is_an_error() {
    assert!(parse("Card 1: 1 2 3\n").is_err());
    assert!(parse("Card x: 1 | 1\n").is_err());
}

#[test]
fn out_of_sequence_id_is_an_error() {
    assert!(parse("Card 2: 1 | 1\n").is_err());
    assert!(parse("Card 1: 1 | 1\nCard 3: 1 | 1\n").is_err());
}
