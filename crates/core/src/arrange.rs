// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Automatic hand arrangement.
//!
//! The arranger looks for the strongest back row first: all the 5 cards groups
//! of the hand are ranked by strength and tried in runs of equal strength. For
//! each back row the groups of the 8 cards left are tried as middle row from
//! the strongest one not above the back row, the last 3 cards become the front
//! row. A middle row is valid if the front row is not above it, the first run
//! with a valid split returns the back row that leaves the strongest middle.
//!
//! The result has the strongest back row of any valid split of the hand and,
//! for that back row, the strongest middle row. Cards are sorted before the
//! search so the result doesn't depend on the hand order.
use log::{debug, warn};

use thirteen_cards::{Card, for_each_split, sort_by_rank};
use thirteen_eval::{RowSize, StrengthKey, classify};

use crate::{Arrangement, Error, Hand, Result, Row};

/// Auto arranger configuration.
#[derive(Debug, Clone)]
pub struct ArrangeConfig {
    /// Maximum number of middle rows to try before giving up.
    pub max_iterations: usize,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        // Above the 1287 * 56 back and middle splits of a 13 cards hand.
        Self {
            max_iterations: 100_000,
        }
    }
}

/// A ranked group of cards and the cards left out.
#[derive(Debug)]
struct Candidate {
    key: StrengthKey,
    cards: Vec<Card>,
    rest: Vec<Card>,
}

/// Arranges a hand with the default configuration.
pub fn auto_arrange(hand: &Hand) -> Result<Arrangement> {
    auto_arrange_with(hand, &ArrangeConfig::default())
}

/// Arranges a hand, fails with [Error::NoValidArrangement] if no valid split
/// is found within the configured iterations.
pub fn auto_arrange_with(hand: &Hand, config: &ArrangeConfig) -> Result<Arrangement> {
    let mut cards = hand.cards().to_vec();
    sort_by_rank(&mut cards);

    let backs = ranked_candidates(&cards, Row::Back.size())?;

    let mut iterations = 0;
    for (run_idx, run) in backs.chunk_by(|a, b| a.key == b.key).enumerate() {
        // Backs in a run have the same key, keep the one leaving the strongest
        // middle, the first one on ties.
        let mut best: Option<(&Candidate, Candidate, StrengthKey)> = None;

        for back in run {
            let middles = ranked_candidates(&back.rest, Row::Middle.size())?;

            for middle in middles.into_iter().filter(|m| m.key <= back.key) {
                if best.as_ref().is_some_and(|(_, m, _)| middle.key <= m.key) {
                    break;
                }

                iterations += 1;
                if iterations > config.max_iterations {
                    warn!(
                        "Arrangement search stopped after {} iterations",
                        config.max_iterations
                    );
                    return Err(Error::NoValidArrangement);
                }

                let front = classify(&middle.rest, Row::Front.size())?;
                if front <= middle.key {
                    best = Some((back, middle, front));
                    break;
                }
            }
        }

        if let Some((back, middle, front)) = best {
            debug!(
                "Arranged hand after {iterations} iterations, back run {run_idx}: \
                 {front} / {} / {}",
                middle.key, back.key
            );

            return Ok(Arrangement::new(middle.rest, middle.cards, back.cards.clone()));
        }

        if run_idx == 0 {
            debug!("Strongest back row {} fouls, searching further", run[0].key);
        }
    }

    warn!("No valid arrangement for hand {hand}");
    Err(Error::NoValidArrangement)
}

/// Returns all the groups of the given size ordered from the strongest.
///
/// Groups with equal keys keep their enumeration order.
fn ranked_candidates(cards: &[Card], size: RowSize) -> Result<Vec<Candidate>> {
    let mut splits = Vec::new();
    for_each_split(cards, size.count(), |chosen, rest| {
        splits.push((chosen.to_vec(), rest.to_vec()));
    });

    let mut candidates = splits
        .into_iter()
        .map(|(cards, rest)| -> Result<Candidate> {
            Ok(Candidate {
                key: classify(&cards, size)?,
                cards,
                rest,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    candidates.sort_by(|a, b| b.key.cmp(&a.key));
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{round::Round, validate};
    use rand::{prelude::*, rngs::StdRng};
    use thirteen_eval::Category;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn row(arr: &Arrangement, row: Row) -> String {
        arr.row(row)
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn arranges_straight_flush_back() {
        let h = hand("3S 4S 5S 6S 7S AC AD KH KD 9C 2D 8H QC");
        let arr = auto_arrange(&h).unwrap();

        assert_eq!(row(&arr, Row::Back), "7S 6S 5S 4S 3S");
        assert!(validate(&arr).unwrap().is_valid);

        let res = validate(&arr).unwrap();
        assert_eq!(res.keys.back.category(), Category::StraightFlush);
        // Aces and kings are the best middle left.
        assert_eq!(res.keys.middle.category(), Category::TwoPair);
        assert_eq!(row(&arr, Row::Middle), "AC AD KD KH QC");
        assert_eq!(row(&arr, Row::Front), "9C 8H 2D");
    }

    #[test]
    fn royal_flush_over_four_of_a_kind() {
        let h = hand("AS AH AD AC KS KH KD QS QH JS TS 9S 8S");
        let arr = auto_arrange(&h).unwrap();
        let res = validate(&arr).unwrap();

        assert!(res.is_valid, "{arr}");
        assert_eq!(row(&arr, Row::Back), "AS KS QS JS TS");
        assert_eq!(res.keys.middle.category(), Category::FullHouse);
        assert_eq!(row(&arr, Row::Front), "QH 9S 8S");
    }

    #[test]
    fn result_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(5);
        let round = Round::deal(4, &mut rng).unwrap();

        for h in round.hands() {
            let arr = auto_arrange(h).unwrap();

            let mut cards = h.cards().to_vec();
            cards.shuffle(&mut rng);
            let shuffled = Hand::new(cards).unwrap();
            assert_eq!(auto_arrange(&shuffled).unwrap(), arr);
        }
    }

    #[test]
    fn middle_is_strongest_for_tied_backs() {
        // Three full houses kings over deuces, only the one keeping the heart
        // deuce out of the back leaves a flush for the middle.
        let h = hand("KS KD KC 2H 2S 2C 4H 6H 8H TH 3D 5D 7C");
        let arr = auto_arrange(&h).unwrap();
        let res = validate(&arr).unwrap();

        assert!(res.is_valid, "{arr}");
        assert_eq!(res.keys.back.category(), Category::FullHouse);
        assert_eq!(row(&arr, Row::Back), "KC KD KS 2C 2S");
        assert_eq!(res.keys.middle.category(), Category::Flush);
        assert_eq!(row(&arr, Row::Middle), "TH 8H 6H 4H 2H");
        assert_eq!(row(&arr, Row::Front), "7C 5D 3D");

        assert_eq!(strongest_valid_rows(&h), (res.keys.back, res.keys.middle));
    }

    #[test]
    fn random_hands_are_valid_with_strongest_rows() {
        let mut rng = StdRng::seed_from_u64(1234);

        for n in 0..25 {
            let round = Round::deal(4, &mut rng).unwrap();
            for h in round.hands() {
                let arr = auto_arrange(h).unwrap();
                let res = validate(&arr).unwrap();
                assert!(res.is_valid, "{arr}\n{:?}", res.reason);

                let mut cards = arr.cards().collect::<Vec<_>>();
                let mut dealt = h.cards().to_vec();
                cards.sort();
                dealt.sort();
                assert_eq!(cards, dealt);

                // No valid split has a stronger back row, or a stronger middle
                // row for the same back row strength.
                if n < 5 {
                    let (back, middle) = strongest_valid_rows(h);
                    assert_eq!(res.keys.back, back, "{arr}");
                    assert_eq!(res.keys.middle, middle, "{arr}");
                }
            }
        }
    }

    // Brute force search for the strongest back and middle rows of any valid split.
    fn strongest_valid_rows(hand: &Hand) -> (StrengthKey, StrengthKey) {
        let mut best: Option<(StrengthKey, StrengthKey)> = None;

        for_each_split(hand.cards(), 5, |back, rest| {
            let back_key = classify(back, RowSize::Five).unwrap();
            if best.as_ref().is_some_and(|(b, _)| *b > back_key) {
                return;
            }

            for_each_split(rest, 5, |middle, front| {
                let middle_key = classify(middle, RowSize::Five).unwrap();
                let front_key = classify(front, RowSize::Three).unwrap();
                if front_key > middle_key || middle_key > back_key {
                    return;
                }

                let rows = (back_key.clone(), middle_key);
                if best.as_ref().is_none_or(|b| rows > *b) {
                    best = Some(rows);
                }
            });
        });

        best.unwrap()
    }

    #[test]
    fn iteration_cap() {
        let h = hand("2C 3D 4H 5S 6C 7D 8H 9S TC JD QH KS AC");

        let config = ArrangeConfig { max_iterations: 0 };
        let err = auto_arrange_with(&h, &config).unwrap_err();
        assert_eq!(err, Error::NoValidArrangement);

        let arr = auto_arrange_with(&h, &ArrangeConfig::default()).unwrap();
        assert!(validate(&arr).unwrap().is_valid);
    }
}
