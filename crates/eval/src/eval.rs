// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier for the rows of an arrangement.
//!
//! A group of cards is classified by counting how many cards share each rank
//! and by checking the 5 cards groups for straights and flushes. The result is
//! a [StrengthKey] made of the group [Category] and the ranks that break ties
//! between groups of the same category.
//!
//! The ace plays high, and low only in the A-2-3-4-5 wheel straight which is
//! the lowest straight.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use thirteen_cards::{Card, Rank, first_duplicate};

/// Errors returned when a group of cards cannot be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The group doesn't have the number of cards required for its row.
    #[error("expected {expected} cards, got {actual}")]
    WrongGroupSize {
        /// The required group size.
        expected: usize,
        /// The number of cards in the group.
        actual: usize,
    },
    /// A card appears more than once in the group.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// The size of a row group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowSize {
    /// The 3 cards front row.
    Three,
    /// The 5 cards middle and back rows.
    Five,
}

impl RowSize {
    /// The number of cards for this size.
    pub fn count(&self) -> usize {
        match self {
            RowSize::Three => 3,
            RowSize::Five => 5,
        }
    }
}

/// A poker hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No other category.
    HighCard = 0,
    /// Two cards with the same rank.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight where all cards have the same suit.
    StraightFlush,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The strength of a classified group.
///
/// Keys compare by category first and then lexicographically by their tiebreak
/// ranks: the rank of the largest rank group first (the trips of a full house,
/// the higher pair of a two pair), kickers in descending order last. Straights
/// only keep their highest card. Equal keys are an exact tie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StrengthKey {
    category: Category,
    tiebreak: Vec<Rank>,
}

impl StrengthKey {
    /// Creates a key from its parts.
    pub fn new(category: Category, tiebreak: Vec<Rank>) -> Self {
        Self { category, tiebreak }
    }

    /// The group category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The ranks used to break ties within the category.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }
}

impl fmt::Display for StrengthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (idx, rank) in self.tiebreak.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{rank}")?;
        }
        write!(f, ")")
    }
}

/// Classifies a group of cards that must have the given size.
pub fn classify(cards: &[Card], size: RowSize) -> Result<StrengthKey, ClassifyError> {
    if cards.len() != size.count() {
        return Err(ClassifyError::WrongGroupSize {
            expected: size.count(),
            actual: cards.len(),
        });
    }

    if let Some(card) = first_duplicate(cards) {
        return Err(ClassifyError::DuplicateCard(card));
    }

    let (pattern, ranks) = rank_groups(cards);

    let key = match size {
        RowSize::Three => match pattern.as_slice() {
            [3] => StrengthKey::new(Category::ThreeOfAKind, ranks),
            [2, 1] => StrengthKey::new(Category::Pair, ranks),
            _ => StrengthKey::new(Category::HighCard, ranks),
        },
        RowSize::Five => {
            let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
            let straight = straight_high(&ranks);

            match (straight, is_flush, pattern.as_slice()) {
                (Some(high), true, _) => StrengthKey::new(Category::StraightFlush, vec![high]),
                (_, _, [4, 1]) => StrengthKey::new(Category::FourOfAKind, ranks),
                (_, _, [3, 2]) => StrengthKey::new(Category::FullHouse, ranks),
                (_, true, _) => StrengthKey::new(Category::Flush, ranks),
                (Some(high), _, _) => StrengthKey::new(Category::Straight, vec![high]),
                (_, _, [3, 1, 1]) => StrengthKey::new(Category::ThreeOfAKind, ranks),
                (_, _, [2, 2, 1]) => StrengthKey::new(Category::TwoPair, ranks),
                (_, _, [2, 1, 1, 1]) => StrengthKey::new(Category::Pair, ranks),
                _ => StrengthKey::new(Category::HighCard, ranks),
            }
        }
    };

    Ok(key)
}

/// Groups cards by rank, returns the groups sizes and ranks ordered by group
/// size and then by rank, largest first.
fn rank_groups(cards: &[Card]) -> (Vec<u8>, Vec<Rank>) {
    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.rank() as usize] += 1;
    }

    let mut groups = Rank::ranks()
        .rev()
        .filter_map(|r| {
            let n = counts[r as usize];
            (n > 0).then_some((n, r))
        })
        .collect::<Vec<_>>();

    // Stable sort keeps higher ranks first within the same group size.
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    groups.into_iter().unzip()
}

/// Returns the straight high card given 5 distinct ranks in descending order.
fn straight_high(ranks: &[Rank]) -> Option<Rank> {
    use Rank::*;

    match ranks {
        [hi, .., lo] if ranks.len() == 5 && hi.value() - lo.value() == 4 => Some(*hi),
        [Ace, Five, Four, Trey, Deuce] => Some(Five),
        _ => None,
    }
}
