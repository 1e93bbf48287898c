// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Row by row comparison of arrangements.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Arrangement, Error, Result, Row, RowKeys, validate};

/// The outcome of a comparison for the first player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The first player wins.
    Win,
    /// The first player loses.
    Lose,
    /// Neither player wins.
    Tie,
}

impl Outcome {
    /// The outcome seen from the other player.
    pub fn reverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Lose,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Tie => "tie",
        };

        f.pad(s)
    }
}

/// Scores a comparison from the row outcomes and rows keys.
///
/// Rules must be antisymmetric: swapping the players and reversing the row
/// outcomes negates the points.
pub trait ScoringRule {
    /// Returns the points won by the first player.
    fn score(&self, rows: &[Outcome; 3], a: &RowKeys, b: &RowKeys) -> i32;
}

/// One point for each row won, minus one for each row lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowMajority;

impl ScoringRule for RowMajority {
    fn score(&self, rows: &[Outcome; 3], _a: &RowKeys, _b: &RowKeys) -> i32 {
        rows.iter()
            .map(|o| match o {
                Outcome::Win => 1,
                Outcome::Lose => -1,
                Outcome::Tie => 0,
            })
            .sum()
    }
}

/// Row majority points with a bonus for winning all three rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepBonus {
    /// Extra points for a sweep.
    pub bonus: i32,
}

impl ScoringRule for SweepBonus {
    fn score(&self, rows: &[Outcome; 3], a: &RowKeys, b: &RowKeys) -> i32 {
        let points = RowMajority.score(rows, a, b);

        if rows.iter().all(|o| *o == Outcome::Win) {
            points + self.bonus
        } else if rows.iter().all(|o| *o == Outcome::Lose) {
            points - self.bonus
        } else {
            points
        }
    }
}

/// The result of comparing two arrangements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The front row outcome.
    pub front: Outcome,
    /// The middle row outcome.
    pub middle: Outcome,
    /// The back row outcome.
    pub back: Outcome,
    /// The overall outcome, given by the sign of the points.
    pub aggregate: Outcome,
    /// The points won by the first player.
    pub points: i32,
}

impl ComparisonResult {
    /// Returns the outcome for a row.
    pub fn row(&self, row: Row) -> Outcome {
        match row {
            Row::Front => self.front,
            Row::Middle => self.middle,
            Row::Back => self.back,
        }
    }

    /// The result seen from the other player.
    pub fn reverse(&self) -> Self {
        Self {
            front: self.front.reverse(),
            middle: self.middle.reverse(),
            back: self.back.reverse(),
            aggregate: self.aggregate.reverse(),
            points: -self.points,
        }
    }
}

/// Compares two valid arrangements with the [RowMajority] rule.
pub fn compare(a: &Arrangement, b: &Arrangement) -> Result<ComparisonResult> {
    compare_with(a, b, &RowMajority)
}

/// Compares two valid arrangements with a scoring rule.
pub fn compare_with<R>(a: &Arrangement, b: &Arrangement, rule: &R) -> Result<ComparisonResult>
where
    R: ScoringRule + ?Sized,
{
    let ka = validated_keys(a)?;
    let kb = validated_keys(b)?;
    Ok(compare_keys(&ka, &kb, rule))
}

fn compare_keys<R>(a: &RowKeys, b: &RowKeys, rule: &R) -> ComparisonResult
where
    R: ScoringRule + ?Sized,
{
    let rows = Row::ALL.map(|row| Outcome::from(a.get(row).cmp(b.get(row))));
    let points = rule.score(&rows, a, b);
    let [front, middle, back] = rows;

    debug!("Rows {front} {middle} {back}, points {points}");

    ComparisonResult {
        front,
        middle,
        back,
        aggregate: Outcome::from(points.cmp(&0)),
        points,
    }
}

fn validated_keys(arrangement: &Arrangement) -> Result<RowKeys> {
    let res = validate(arrangement)?;
    if res.is_valid {
        Ok(res.keys)
    } else {
        Err(Error::UnvalidatedArrangement(
            res.reason.unwrap_or_default(),
        ))
    }
}

/// A player total after comparing with all other players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotal {
    /// The player index.
    pub player: usize,
    /// The sum of the points against each opponent.
    pub points: i32,
    /// The comparison against each opponent, by opponent index.
    pub results: Vec<(usize, ComparisonResult)>,
}

/// Compares each pair of players arrangements.
///
/// Every arrangement must be valid, and there must be at least 2 of them.
pub fn compare_all<R>(arrangements: &[Arrangement], rule: &R) -> Result<Vec<PlayerTotal>>
where
    R: ScoringRule + ?Sized,
{
    if arrangements.len() < 2 {
        return Err(Error::InvalidPlayerCount(arrangements.len()));
    }

    let keys = arrangements
        .iter()
        .map(validated_keys)
        .collect::<Result<Vec<_>>>()?;

    let mut totals = (0..keys.len())
        .map(|player| PlayerTotal {
            player,
            points: 0,
            results: Vec::with_capacity(keys.len() - 1),
        })
        .collect::<Vec<_>>();

    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            let res = compare_keys(&keys[i], &keys[j], rule);

            totals[i].points += res.points;
            totals[j].points -= res.points;
            totals[j].results.push((i, res.reverse()));
            totals[i].results.push((j, res));
        }
    }

    Ok(totals)
}
