// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Offline table that deals, arranges, and scores a round.
use anyhow::Result;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::fmt;

use thirteen_core::{
    ArrangeConfig, Arrangement, Hand, PlayerTotal, Round, Row, RowKeys, SweepBonus,
    ValidationResult, compare_all, validate,
};

/// Table configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of players at the table.
    pub players: usize,
    /// Optional seed for a repeatable deal.
    pub seed: Option<u64>,
    /// The scoring rule.
    pub rule: SweepBonus,
    /// The auto arranger configuration.
    pub arrange: ArrangeConfig,
}

/// A player hand, its arrangement, and its score.
#[derive(Debug, Serialize)]
pub struct PlayerReport {
    /// The dealt hand.
    pub hand: Hand,
    /// The arranged rows.
    pub arrangement: Arrangement,
    /// The rows validation.
    pub validation: ValidationResult,
    /// The player score against the other players.
    pub total: PlayerTotal,
}

/// The result of a round.
#[derive(Debug, Serialize)]
pub struct TableReport {
    /// The seed used for the deal.
    pub seed: Option<u64>,
    /// The players results.
    pub players: Vec<PlayerReport>,
}

/// Deals a round, arranges all hands, and compares all players.
pub fn play(config: &Config) -> Result<TableReport> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let round = Round::deal(config.players, &mut rng)?;
    let arrangements = round.auto_arrange_all(&config.arrange)?;
    let totals = compare_all(&arrangements, &config.rule)?;

    let players = round
        .hands()
        .iter()
        .zip(arrangements)
        .zip(totals)
        .map(|((hand, arrangement), total)| -> Result<PlayerReport> {
            let validation = validate(&arrangement)?;
            Ok(PlayerReport {
                hand: hand.clone(),
                arrangement,
                validation,
                total,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(best) = players.iter().max_by_key(|p| p.total.points) {
        info!(
            "Round done, best player {} with {} points",
            best.total.player + 1,
            best.total.points
        );
    }

    Ok(TableReport {
        seed: config.seed,
        players,
    })
}

/// Displays arrangement rows next to their classification.
pub struct RowsView<'a>(pub &'a Arrangement, pub &'a RowKeys);

impl fmt::Display for RowsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RowsView(arrangement, keys) = self;

        for (idx, row) in Row::ALL.into_iter().enumerate() {
            let cards = arrangement
                .row(row)
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");

            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{row:>6}: {cards:<14}  {}", keys.get(row))?;
        }

        Ok(())
    }
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.players {
            writeln!(f, "Player {}: {}", p.total.player + 1, p.hand)?;
            writeln!(f, "{}", RowsView(&p.arrangement, &p.validation.keys))?;

            for (opponent, res) in &p.total.results {
                writeln!(
                    f,
                    "  vs player {}: {} {} {} -> {} ({:+})",
                    opponent + 1,
                    res.front,
                    res.middle,
                    res.back,
                    res.aggregate,
                    res.points
                )?;
            }

            writeln!(f, "  total: {:+}", p.total.points)?;
            writeln!(f)?;
        }

        Ok(())
    }
}
