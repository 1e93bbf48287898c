// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Thirteen cards game arrangement and scoring engine.
//!
//! Each player splits 13 cards into a 3 cards front row and 5 cards middle and
//! back rows, the rows must not get weaker from front to back. This crate
//! validates arrangements, arranges hands automatically, and compares players
//! arrangements row by row:
//!
//! ```
//! # use thirteen_core::*;
//! let a: Hand = "2C 3D 4H 5S 6C 7D 8H 9S TC JD QH KS AC".parse().unwrap();
//! let b: Hand = "2D 3H 4S 5C 6D 7H 8S 9C TD JH QS KC AD".parse().unwrap();
//!
//! let a = auto_arrange(&a).unwrap();
//! let b = auto_arrange(&b).unwrap();
//! assert!(validate(&a).unwrap().is_valid);
//!
//! let res = compare(&a, &b).unwrap();
//! assert_eq!(res.aggregate, compare(&b, &a).unwrap().aggregate.reverse());
//! ```
//!
//! All operations are pure functions of their inputs, arrangements are owned by
//! the caller and moved between rows with [Arrangement::move_card].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod arrange;
pub use arrange::{ArrangeConfig, auto_arrange, auto_arrange_with};
pub mod arrangement;
pub use arrangement::{Arrangement, Hand, Row, parse_cards};
pub mod compare;
pub use compare::{
    ComparisonResult, Outcome, PlayerTotal, RowMajority, ScoringRule, SweepBonus, compare,
    compare_all, compare_with,
};
pub mod error;
pub use error::{Error, Result};
pub mod round;
pub use round::Round;
pub mod validate;
pub use validate::{RowKeys, ValidationResult, Violation, validate};

// Reexport cards and classifier types.
pub use thirteen_cards::{Card, Deck, Rank, Suit, make_deck, sort_by_rank};
pub use thirteen_eval::{Category, RowSize, StrengthKey, classify};
