// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Building blocks for the hand evaluator.
//!
//! All functions work on rank values, 2 for a deuce up to 14 for an ace, with
//! an ace playing low in a wheel straight represented by [Rank::ACE_LOW].
use ahash::HashMap;

use crate::{Card, Rank, Suit};

/// Rank values grouped by the number of times they appear in a hand.
///
/// Each group is sorted from the strongest value to the weakest.
#[derive(Debug, Clone)]
pub struct Groups {
    /// Values appearing exactly four times.
    pub quads: Vec<u8>,
    /// Values appearing exactly three times.
    pub trips: Vec<u8>,
    /// Values appearing exactly two times.
    pub pairs: Vec<u8>,
    /// How many times each value appears.
    pub counts: HashMap<u8, usize>,
}

impl Groups {
    /// Groups the given values.
    pub fn new(values: &[u8]) -> Self {
        let mut counts = HashMap::default();
        for &value in values {
            *counts.entry(value).or_insert(0) += 1;
        }

        let (mut quads, mut trips, mut pairs) = (Vec::new(), Vec::new(), Vec::new());
        for (&value, &count) in &counts {
            match count {
                4 => quads.push(value),
                3 => trips.push(value),
                2 => pairs.push(value),
                _ => {}
            }
        }

        quads.sort_unstable_by(|a, b| b.cmp(a));
        trips.sort_unstable_by(|a, b| b.cmp(a));
        pairs.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            quads,
            trips,
            pairs,
            counts,
        }
    }
}

/// Returns the unique values sorted from highest to lowest.
pub fn unique_desc(values: impl IntoIterator<Item = u8>) -> Vec<u8> {
    let mut values = values.into_iter().collect::<Vec<_>>();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values.dedup();
    values
}

/// Finds the highest straight in a strictly descending list of unique values.
///
/// An ace also plays low so that A-2-3-4-5 returns `[5, 4, 3, 2, 1]`, the
/// weakest straight.
pub fn find_straight(values: &[u8]) -> Option<[u8; 5]> {
    let mut values = values.to_vec();
    if values.contains(&Rank::Ace.value()) {
        values.push(Rank::ACE_LOW);
    }

    values
        .windows(5)
        .filter(|w| w.windows(2).all(|p| p[1] + 1 == p[0]))
        .find_map(|w| w.try_into().ok())
}

/// Values of the cards with the given suit, highest first.
fn suited_values(cards: &[Card], suit: Suit) -> Vec<u8> {
    let mut values = cards
        .iter()
        .filter(|c| c.suit() == suit)
        .map(Card::value)
        .collect::<Vec<_>>();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}

/// Finds the five highest values of a suit with at least 5 cards.
///
/// If more than one suit has 5 cards the highest five values win.
pub fn best_flush(cards: &[Card]) -> Option<[u8; 5]> {
    Suit::suits()
        .filter_map(|suit| {
            let values = suited_values(cards, suit);
            values.get(..5).and_then(|top| <[u8; 5]>::try_from(top).ok())
        })
        .max()
}

/// Finds a straight within a suit with at least 5 cards.
pub fn best_straight_flush(cards: &[Card]) -> Option<[u8; 5]> {
    Suit::suits().find_map(|suit| {
        let mut values = suited_values(cards, suit);
        if values.len() < 5 {
            return None;
        }

        values.dedup();
        find_straight(&values)
    })
}
