// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Thirteen cards game hand classifier.
//!
//! Classifies the 3 cards front row and the 5 cards middle and back rows of an
//! arrangement into a poker [Category] and a [StrengthKey] that totally orders
//! groups of either size:
//!
//! ```
//! # use thirteen_eval::*;
//! let cards = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>().unwrap())
//!         .collect::<Vec<_>>()
//! };
//!
//! let front = classify(&cards("AC AD 2H"), RowSize::Three).unwrap();
//! let middle = classify(&cards("3S 4S 5S 6S 7S"), RowSize::Five).unwrap();
//! assert_eq!(front.category(), Category::Pair);
//! assert_eq!(middle.category(), Category::StraightFlush);
//! assert!(front < middle);
//! ```
//!
//! Three cards groups are never straights or flushes, only high card, pair,
//! and three of a kind are recognized for the front row.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Category, ClassifyError, RowSize, StrengthKey, classify};

// Reexport cards types.
pub use thirteen_cards::{Card, Deck, Rank, Suit};
