// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards definitions.
use ahash::AHashSet;
use rand::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Error returned when a card cannot be built from its parts or text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card: {0}")]
pub struct InvalidCard(pub String);

/// A playing card.
///
/// A card is packed in 16 bits with the following format:
///
/// ```text
///   +--------+--------+
///   |xxxxcdhs|xxxxrrrr|
///   +--------+--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card(u16);

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u16, suit as u16);
        Self(rank | (suit << 8))
    }

    /// Create a card from a rank value in 2..=14 and a suit letter.
    pub fn try_new(rank_value: u8, suit: char) -> Result<Card, InvalidCard> {
        let invalid = || InvalidCard(format!("rank {rank_value} suit {suit:?}"));
        let rank = Rank::from_value(rank_value).ok_or_else(invalid)?;
        let suit = Suit::from_char(suit).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }

    /// This card unique id.
    pub fn id(&self) -> u16 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => unreachable!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match Rank::ranks().nth(self.rank_bits() as usize) {
            Some(rank) => rank,
            None => unreachable!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        (self.0 & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// The id used by the front end card assets, e.g. `ace_of_spades`.
    pub fn asset_id(&self) -> String {
        format!("{}_of_{}", self.rank().name(), self.suit().name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Cards order by rank first and then by suit.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.suit().cmp(&other.suit()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Card {
    type Err = InvalidCard;

    /// Parses a short form card (`AS`, `th`, `10C`) or an asset id (`ace_of_spades`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidCard(s.to_string());
        let s = s.trim();

        if let Some((rank, suit)) = s.split_once("_of_") {
            let rank = Rank::ranks()
                .find(|r| r.name().eq_ignore_ascii_case(rank))
                .ok_or_else(invalid)?;
            let suit = Suit::suits()
                .find(|st| st.name().eq_ignore_ascii_case(suit))
                .ok_or_else(invalid)?;
            return Ok(Card::new(rank, suit));
        }

        let mut chars = s.chars();
        let suit = chars.next_back().and_then(Suit::from_char).ok_or_else(invalid)?;
        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "10" => Rank::Ten,
            r => {
                let mut rc = r.chars();
                match (rc.next(), rc.next()) {
                    (Some(c), None) => Rank::from_char(c).ok_or_else(invalid)?,
                    _ => return Err(invalid()),
                }
            }
        };

        Ok(Card::new(rank, suit))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank order value, from 2 for a deuce to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        value
            .checked_sub(2)
            .and_then(|idx| Rank::ranks().nth(idx as usize))
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            c => return c.to_digit(10).and_then(|d| Rank::from_value(d as u8)),
        };

        Some(rank)
    }

    fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits never break ties between hands, their order is only used to sort
/// cards deterministically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Returns the suit for a letter or a suit symbol.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' | '♣' => Some(Suit::Clubs),
            'D' | '♦' => Some(Suit::Diamonds),
            'H' | '♥' => Some(Suit::Hearts),
            'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

/// Sorts cards by descending rank, cards with the same rank by suit.
pub fn sort_by_rank(cards: &mut [Card]) {
    cards.sort_by(|a, b| b.cmp(a));
}

/// Returns the first card that appears more than once.
pub fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = AHashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}

/// Calls the `f` closure for each k-subset of `cards`.
///
/// Subsets are visited in lexicographic order of the cards positions, so
/// iteration order is fully determined by the input order.
pub fn for_each_subset<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card]),
{
    let mut subset = Vec::with_capacity(k);
    for_each_index_subset(cards.len(), k, |idx| {
        subset.clear();
        subset.extend(idx.iter().map(|&i| cards[i]));
        f(&subset);
    });
}

/// Calls the `f` closure for each k-subset of `cards` and the cards left out.
pub fn for_each_split<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card], &[Card]),
{
    let mut subset = Vec::with_capacity(k);
    let mut rest = Vec::with_capacity(cards.len().saturating_sub(k));
    for_each_index_subset(cards.len(), k, |idx| {
        subset.clear();
        rest.clear();

        let mut next = idx.iter().peekable();
        for (pos, card) in cards.iter().enumerate() {
            if next.peek().is_some_and(|&&i| i == pos) {
                next.next();
                subset.push(*card);
            } else {
                rest.push(*card);
            }
        }

        f(&subset, &rest);
    });
}

fn for_each_index_subset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    let mut idx = (0..k).collect::<Vec<_>>();
    loop {
        f(&idx);

        // Advance the rightmost index that has room and reset the ones after it.
        let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            break;
        };

        idx[pos] += 1;
        for i in (pos + 1)..k {
            idx[i] = idx[i - 1] + 1;
        }
    }
}

/// Creates an ordered deck with the 52 cards.
pub fn make_deck() -> Deck {
    Deck::default()
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards, returns `None` if the deck has fewer cards.
    pub fn deal_hand(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }

        let at = self.cards.len() - n;
        Some(self.cards.split_off(at))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        for_each_subset(&self.cards, k, f);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));

        while let Some(card) = deck.deal() {
            assert_eq!(card.id() & 0xF, card.rank() as u16);
            assert_eq!((card.id() >> 8) & 0xF, card.suit() as u16);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);

        for rank in Rank::ranks() {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }

        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(c.asset_id(), "king_of_diamonds");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
        assert_eq!(c.asset_id(), "10_of_hearts");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "AC");
        assert_eq!(c.asset_id(), "ace_of_clubs");
    }

    #[test]
    fn card_parsing() {
        let ts = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!("TS".parse::<Card>().unwrap(), ts);
        assert_eq!("ts".parse::<Card>().unwrap(), ts);
        assert_eq!("10S".parse::<Card>().unwrap(), ts);
        assert_eq!("10♠".parse::<Card>().unwrap(), ts);
        assert_eq!("10_of_spades".parse::<Card>().unwrap(), ts);

        let qh = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!("Queen_of_Hearts".parse::<Card>().unwrap(), qh);

        for card in make_deck() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            assert_eq!(card.asset_id().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn invalid_cards() {
        for s in ["", "S", "1S", "11S", "AX", "ZZ", "one_of_spades", "ace_of_stars"] {
            assert!(s.parse::<Card>().is_err(), "{s} should not parse");
        }

        assert!(Card::try_new(1, 'S').is_err());
        assert!(Card::try_new(15, 'S').is_err());
        assert!(Card::try_new(10, 'X').is_err());
        assert_eq!(
            Card::try_new(14, 'd').unwrap(),
            Card::new(Rank::Ace, Suit::Diamonds)
        );
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Jack, Suit::Clubs);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"JC\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), c);
        assert!(serde_json::from_str::<Card>("\"XX\"").is_err());
    }

    #[test]
    fn sort_cards() {
        let mut hand = cards("3D AS TC AH 3C");
        sort_by_rank(&mut hand);
        assert_eq!(hand, cards("AH AS TC 3C 3D"));
    }

    #[test]
    fn duplicates() {
        assert_eq!(first_duplicate(&cards("AS KS QS")), None);
        assert_eq!(
            first_duplicate(&cards("AS KS QS KS")),
            Some(Card::new(Rank::King, Suit::Spades))
        );
    }

    #[test]
    fn deck_for_each() {
        let deck = make_deck();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(2, |_| count += 1);
        assert_eq!(count, 1_225);
    }

    #[test]
    fn split_visits_complements() {
        let hand = cards("2C 3C 4C 5C 6C 7C 8C 9C TC JC QC KC AC");

        let mut count = 0;
        for_each_split(&hand, 5, |chosen, rest| {
            assert_eq!(chosen.len(), 5);
            assert_eq!(rest.len(), 8);

            let mut all = chosen.to_vec();
            all.extend_from_slice(rest);
            all.sort();
            assert_eq!(all, hand);
            count += 1;
        });
        assert_eq!(count, 1_287);

        // Edge cases.
        let mut count = 0;
        for_each_subset(&hand, 0, |c| {
            assert!(c.is_empty());
            count += 1;
        });
        assert_eq!(count, 1);

        for_each_subset(&hand[..2], 3, |_| panic!("no 3-subsets of 2 cards"));
    }

    #[test]
    fn deal_hands() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(101));
        let mut seen = HashSet::default();

        for _ in 0..4 {
            let hand = deck.deal_hand(13).unwrap();
            assert_eq!(hand.len(), 13);
            seen.extend(hand);
        }

        assert!(deck.is_empty());
        assert_eq!(seen.len(), Deck::SIZE);
        assert!(deck.deal_hand(1).is_none());
        assert!(deck.deal().is_none());
    }
}
