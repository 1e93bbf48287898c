// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine errors.
use thiserror::Error;

use thirteen_cards::{Card, InvalidCard};
use thirteen_eval::ClassifyError;

/// Errors returned by the engine operations.
///
/// A fouled arrangement is not an error, [validate](crate::validate) reports it
/// as an invalid [ValidationResult](crate::ValidationResult). These errors are
/// for inputs a well behaved caller should never produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card could not be built or parsed.
    #[error(transparent)]
    InvalidCard(#[from] InvalidCard),
    /// A group doesn't have the number of cards required for its row.
    #[error("expected {expected} cards, got {actual}")]
    WrongGroupSize {
        /// The required group size.
        expected: usize,
        /// The number of cards in the group.
        actual: usize,
    },
    /// A card appears more than once in a group.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// The arrangement rows are not 3/5/5 or don't hold 13 distinct cards.
    #[error("malformed arrangement: {0}")]
    MalformedArrangement(String),
    /// No split of the hand satisfies the rows ordering.
    #[error("no valid arrangement found")]
    NoValidArrangement,
    /// An arrangement was submitted for comparison without passing validation.
    #[error("arrangement is not valid: {0}")]
    UnvalidatedArrangement(String),
    /// A round needs between 2 and 4 players.
    #[error("invalid number of players {0}")]
    InvalidPlayerCount(usize),
}

impl From<ClassifyError> for Error {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::WrongGroupSize { expected, actual } => {
                Error::WrongGroupSize { expected, actual }
            }
            ClassifyError::DuplicateCard(card) => Error::DuplicateCard(card),
        }
    }
}

/// Engine result type.
pub type Result<T> = std::result::Result<T, Error>;
