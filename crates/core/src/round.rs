// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dealing a round of hands.
use log::info;
use rand::Rng;

use thirteen_cards::Deck;

use crate::{
    ArrangeConfig, Arrangement, Error, Hand, Result, arrange::auto_arrange_with,
};

/// The hands dealt to the players of a round.
#[derive(Debug, Clone)]
pub struct Round {
    hands: Vec<Hand>,
}

impl Round {
    /// Minimum number of players.
    pub const MIN_PLAYERS: usize = 2;
    /// Maximum number of players, a deck has cards for four hands.
    pub const MAX_PLAYERS: usize = Deck::SIZE / Hand::SIZE;

    /// Shuffles a deck and deals a hand to each player.
    pub fn deal<R: Rng>(players: usize, rng: &mut R) -> Result<Self> {
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&players) {
            return Err(Error::InvalidPlayerCount(players));
        }

        let mut deck = Deck::new_and_shuffled(rng);
        let hands = (0..players)
            .map(|_| {
                let cards = deck.deal_hand(Hand::SIZE).ok_or_else(|| {
                    Error::MalformedArrangement("deck run out of cards".to_string())
                })?;
                Hand::new(cards)
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Dealt {players} hands, {} cards left", deck.count());

        Ok(Self { hands })
    }

    /// The players hands.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Arranges each player hand automatically.
    pub fn auto_arrange_all(&self, config: &ArrangeConfig) -> Result<Vec<Arrangement>> {
        self.hands
            .iter()
            .map(|hand| auto_arrange_with(hand, config))
            .collect()
    }
}
