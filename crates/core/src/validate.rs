// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Arrangement validation.
use serde::{Deserialize, Serialize};
use std::fmt;

use thirteen_cards::first_duplicate;
use thirteen_eval::{StrengthKey, classify};

use crate::{Arrangement, Error, Hand, Result, Row};

/// The strength keys of the three rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowKeys {
    /// The front row key.
    pub front: StrengthKey,
    /// The middle row key.
    pub middle: StrengthKey,
    /// The back row key.
    pub back: StrengthKey,
}

impl RowKeys {
    /// Classifies the rows of an arrangement with valid rows sizes.
    pub fn classify(arrangement: &Arrangement) -> Result<Self> {
        let key = |row: Row| classify(arrangement.row(row), row.size());

        Ok(Self {
            front: key(Row::Front)?,
            middle: key(Row::Middle)?,
            back: key(Row::Back)?,
        })
    }

    /// Returns the key for a row.
    pub fn get(&self, row: Row) -> &StrengthKey {
        match row {
            Row::Front => &self.front,
            Row::Middle => &self.middle,
            Row::Back => &self.back,
        }
    }
}

/// A broken rows ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// The front row is stronger than the middle row.
    FrontOverMiddle,
    /// The middle row is stronger than the back row.
    MiddleOverBack,
}

impl Violation {
    /// The stronger and weaker rows that should have been swapped.
    pub fn rows(&self) -> (Row, Row) {
        match self {
            Violation::FrontOverMiddle => (Row::Front, Row::Middle),
            Violation::MiddleOverBack => (Row::Middle, Row::Back),
        }
    }

    fn describe(&self, keys: &RowKeys) -> String {
        let (upper, lower) = self.rows();
        format!(
            "{upper} row {} is stronger than {lower} row {}",
            keys.get(upper),
            keys.get(lower)
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (upper, lower) = self.rows();
        write!(f, "{upper} row is stronger than {lower} row")
    }
}

/// The result of validating an arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The rows are ordered front <= middle <= back.
    pub is_valid: bool,
    /// Guidance text for an invalid arrangement.
    pub reason: Option<String>,
    /// The rows keys.
    pub keys: RowKeys,
    /// The broken orderings from front to back.
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// The first broken ordering, if any.
    pub fn first_violation(&self) -> Option<Violation> {
        self.violations.first().copied()
    }
}

/// Validates an arrangement.
///
/// Returns an error if the rows are not 3/5/5 cards or the arrangement doesn't
/// hold 13 distinct cards, a fouled arrangement is returned as an invalid result.
pub fn validate(arrangement: &Arrangement) -> Result<ValidationResult> {
    check_structure(arrangement)?;

    let keys = RowKeys::classify(arrangement)?;

    let mut violations = Vec::new();
    if keys.front > keys.middle {
        violations.push(Violation::FrontOverMiddle);
    }

    if keys.middle > keys.back {
        violations.push(Violation::MiddleOverBack);
    }

    let reason = (!violations.is_empty()).then(|| {
        violations
            .iter()
            .map(|v| v.describe(&keys))
            .collect::<Vec<_>>()
            .join("; ")
    });

    Ok(ValidationResult {
        is_valid: violations.is_empty(),
        reason,
        keys,
        violations,
    })
}

fn check_structure(arrangement: &Arrangement) -> Result<()> {
    for row in Row::ALL {
        let len = arrangement.row(row).len();
        if len != row.capacity() {
            return Err(Error::MalformedArrangement(format!(
                "{row} row has {len} cards, expected {}",
                row.capacity()
            )));
        }
    }

    let cards = arrangement.cards().collect::<Vec<_>>();
    if let Some(card) = first_duplicate(&cards) {
        return Err(Error::MalformedArrangement(format!(
            "card {card} appears more than once"
        )));
    }

    debug_assert_eq!(cards.len(), Hand::SIZE);

    Ok(())
}
