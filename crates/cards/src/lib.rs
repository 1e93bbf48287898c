// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Thirteen cards game card types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use thirteen_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.rank().value(), 14);
//!
//! // Cards can be parsed from their short or asset id form.
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(kd, "king_of_diamonds".parse().unwrap());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating card subsets:
//!
//! ```
//! # use thirteen_cards::{make_deck, Deck};
//! // Iterate through all 3 cards hands.
//! let mut counter = 0;
//! make_deck().for_each(3, |hand| {
//!     assert_eq!(hand.len(), 3);
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{
    Card, Deck, InvalidCard, Rank, Suit, first_duplicate, for_each_split, for_each_subset,
    make_deck, sort_by_rank,
};
