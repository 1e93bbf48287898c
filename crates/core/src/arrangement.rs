// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hands and their arrangement into rows.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use thirteen_cards::{Card, first_duplicate, sort_by_rank};
use thirteen_eval::RowSize;

use crate::{Error, Result};

/// A row of an arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    /// The 3 cards front row.
    Front,
    /// The 5 cards middle row.
    Middle,
    /// The 5 cards back row.
    Back,
}

impl Row {
    /// All rows from front to back.
    pub const ALL: [Row; 3] = [Row::Front, Row::Middle, Row::Back];

    /// The row group size.
    pub fn size(&self) -> RowSize {
        match self {
            Row::Front => RowSize::Three,
            Row::Middle | Row::Back => RowSize::Five,
        }
    }

    /// The number of cards the row must hold.
    pub fn capacity(&self) -> usize {
        self.size().count()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Row::Front => "front",
            Row::Middle => "middle",
            Row::Back => "back",
        };

        f.pad(name)
    }
}

/// The 13 distinct cards dealt to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 13;

    /// Creates a hand checking it has 13 distinct cards.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != Self::SIZE {
            return Err(Error::MalformedArrangement(format!(
                "hand has {} cards, expected {}",
                cards.len(),
                Self::SIZE
            )));
        }

        if let Some(card) = first_duplicate(&cards) {
            return Err(Error::MalformedArrangement(format!(
                "card {card} appears more than once"
            )));
        }

        Ok(Self { cards })
    }

    /// The hand cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Hand::new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses 13 whitespace or comma separated cards.
    fn from_str(s: &str) -> Result<Self> {
        let cards = parse_cards(s)?;
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// Parses whitespace or comma separated cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|c| !c.is_empty())
        .map(|c| c.parse::<Card>().map_err(Error::from))
        .collect()
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }
        write!(f, "{card}")?;
    }

    Ok(())
}

/// A player hand split into front, middle, and back rows.
///
/// Rows are owned card lists that can hold any number of cards while the player
/// moves cards around, [validate](crate::validate) checks the rows sizes and
/// ordering before the arrangement is compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    front: Vec<Card>,
    middle: Vec<Card>,
    back: Vec<Card>,
}

impl Arrangement {
    /// Creates an arrangement from its rows.
    pub fn new(front: Vec<Card>, middle: Vec<Card>, back: Vec<Card>) -> Self {
        Self {
            front,
            middle,
            back,
        }
    }

    /// Creates the initial arrangement for a dealt hand, the lowest cards go
    /// to the front and the highest to the back.
    pub fn unarranged(hand: &Hand) -> Self {
        let mut cards = hand.cards().to_vec();
        cards.sort();

        let back = cards.split_off(Row::Front.capacity() + Row::Middle.capacity());
        let middle = cards.split_off(Row::Front.capacity());

        let mut arrangement = Self::new(cards, middle, back);
        for row in Row::ALL {
            sort_by_rank(arrangement.row_mut(row));
        }

        arrangement
    }

    /// Returns the cards in a row.
    pub fn row(&self, row: Row) -> &[Card] {
        match row {
            Row::Front => &self.front,
            Row::Middle => &self.middle,
            Row::Back => &self.back,
        }
    }

    fn row_mut(&mut self, row: Row) -> &mut Vec<Card> {
        match row {
            Row::Front => &mut self.front,
            Row::Middle => &mut self.middle,
            Row::Back => &mut self.back,
        }
    }

    /// Iterates all the cards from front to back.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Row::ALL.into_iter().flat_map(|row| self.row(row).iter().copied())
    }

    /// Total number of cards in the rows.
    pub fn len(&self) -> usize {
        self.front.len() + self.middle.len() + self.back.len()
    }

    /// Checks if all rows are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the row holding a card.
    pub fn find_card(&self, card: Card) -> Option<Row> {
        Row::ALL.into_iter().find(|&row| self.row(row).contains(&card))
    }

    /// Moves a card to the end of a row and sorts that row by rank.
    pub fn move_card(&mut self, card: Card, to: Row) -> Result<()> {
        let from = self.find_card(card).ok_or_else(|| {
            Error::MalformedArrangement(format!("card {card} is not in the arrangement"))
        })?;

        self.row_mut(from).retain(|c| c != &card);

        let target = self.row_mut(to);
        target.push(card);
        sort_by_rank(target);

        Ok(())
    }

    /// Swaps two cards between their rows, rows keep their size.
    pub fn swap_cards(&mut self, a: Card, b: Card) -> Result<()> {
        let missing = |card: Card| {
            Error::MalformedArrangement(format!("card {card} is not in the arrangement"))
        };

        let row_a = self.find_card(a).ok_or_else(|| missing(a))?;
        let row_b = self.find_card(b).ok_or_else(|| missing(b))?;

        for (row, from, to) in [(row_a, a, b), (row_b, b, a)] {
            let cards = self.row_mut(row);
            if let Some(pos) = cards.iter().position(|c| c == &from) {
                cards[pos] = to;
            }
        }

        sort_by_rank(self.row_mut(row_a));
        sort_by_rank(self.row_mut(row_b));

        Ok(())
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in Row::ALL {
            write!(f, "{row:>6}: ")?;
            write_cards(f, self.row(row))?;
            if row != Row::Back {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thirteen_cards::{Rank, Suit};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    const HAND: &str = "2C 3D 4H 5S 6C 7D 8H 9S TC JD QH KS AC";

    #[test]
    fn hand_checks() {
        let hand = HAND.parse::<Hand>().unwrap();
        assert_eq!(hand.cards().len(), Hand::SIZE);
        assert_eq!(hand.to_string(), HAND);

        let err = "2C 3D 4H".parse::<Hand>().unwrap_err();
        assert!(matches!(err, Error::MalformedArrangement(_)));

        let err = "2C 3D 4H 5S 6C 7D 8H 9S TC JD QH KS 2C"
            .parse::<Hand>()
            .unwrap_err();
        assert!(matches!(err, Error::MalformedArrangement(_)));

        let err = "2C 3D XX".parse::<Hand>().unwrap_err();
        assert!(matches!(err, Error::InvalidCard(_)));
    }

    #[test]
    fn parse_with_commas() {
        assert_eq!(
            cards("AS,KD, 10h"),
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Ten, Suit::Hearts),
            ]
        );
    }

    #[test]
    fn unarranged_rows() {
        let hand = HAND.parse::<Hand>().unwrap();
        let arr = Arrangement::unarranged(&hand);

        assert_eq!(arr.row(Row::Front), cards("4H 3D 2C").as_slice());
        assert_eq!(arr.row(Row::Middle), cards("9S 8H 7D 6C 5S").as_slice());
        assert_eq!(arr.row(Row::Back), cards("AC KS QH JD TC").as_slice());
        assert_eq!(arr.len(), 13);
        assert_eq!(arr.cards().count(), 13);
    }

    #[test]
    fn move_between_rows() {
        let hand = HAND.parse::<Hand>().unwrap();
        let mut arr = Arrangement::unarranged(&hand);

        arr.move_card(card("AC"), Row::Front).unwrap();
        assert_eq!(arr.row(Row::Front), cards("AC 4H 3D 2C").as_slice());
        assert_eq!(arr.row(Row::Back).len(), 4);
        assert_eq!(arr.find_card(card("AC")), Some(Row::Front));
        assert_eq!(arr.len(), 13);

        // Moving within the same row keeps the cards.
        arr.move_card(card("AC"), Row::Front).unwrap();
        assert_eq!(arr.row(Row::Front).len(), 4);

        let err = arr.move_card(card("AD"), Row::Back).unwrap_err();
        assert!(matches!(err, Error::MalformedArrangement(_)));
        assert_eq!(arr.len(), 13);
    }

    #[test]
    fn swap_between_rows() {
        let hand = HAND.parse::<Hand>().unwrap();
        let mut arr = Arrangement::unarranged(&hand);

        arr.swap_cards(card("2C"), card("KS")).unwrap();
        assert_eq!(arr.row(Row::Front), cards("KS 4H 3D").as_slice());
        assert_eq!(arr.row(Row::Back), cards("AC QH JD TC 2C").as_slice());

        assert!(arr.swap_cards(card("2C"), card("2D")).is_err());
    }

    #[test]
    fn arrangement_serde() {
        let hand = HAND.parse::<Hand>().unwrap();
        let arr = Arrangement::unarranged(&hand);

        let json = serde_json::to_string(&arr).unwrap();
        assert!(json.starts_with(r#"{"front":["4H","3D","2C"]"#));
        assert_eq!(serde_json::from_str::<Arrangement>(&json).unwrap(), arr);

        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), hand);
        assert!(serde_json::from_str::<Hand>(r#"["AS","KS"]"#).is_err());
    }
}
