// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em hand evaluator.
//!
//! A 7 cards hand is classified into one of nine [HandCategory] and given a
//! [Strength], the category score followed by the tie-break values in priority
//! order. Two hands are compared by their strength only.
use log::trace;
use serde::{Serialize, Serializer};
use std::{cmp::Ordering, fmt};

use crate::{
    Card, EvalError, Rank,
    domain::{Groups, best_flush, best_straight_flush, find_straight, unique_desc},
};

/// The number of cards in a Texas Hold'em hand, 2 hole cards and 5 on the board.
pub const HAND_SIZE: usize = 7;

/// The hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category score, 0 for a high card up to 8 for a straight flush.
    pub const fn score(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pairs",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        f.write_str(s)
    }
}

/// The strength of a hand.
///
/// The first value is the category score and the following values are the
/// tie-breaks in priority order. Unused trailing slots are zero so that
/// comparing two strengths of different length is the same as comparing them
/// padded with zeros.
#[derive(Clone, Copy, Default)]
pub struct Strength {
    values: [u8; Self::CAPACITY],
    len: u8,
}

impl Strength {
    /// Maximum number of values, the category and up to 5 tie-breaks.
    pub const CAPACITY: usize = 6;

    /// Creates a strength for a category and its tie-break values.
    ///
    /// Tie-breaks past the fifth are ignored.
    pub fn new(category: HandCategory, tie_breaks: impl IntoIterator<Item = u8>) -> Self {
        let mut values = [0; Self::CAPACITY];
        values[0] = category.score();

        let mut len = 1;
        for value in tie_breaks.into_iter().take(Self::CAPACITY - 1) {
            values[len] = value;
            len += 1;
        }

        Self {
            values,
            len: len as u8,
        }
    }

    /// The category score.
    pub fn score(&self) -> u8 {
        self.values[0]
    }

    /// The meaningful values, the category score first.
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }
}

impl PartialEq for Strength {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for Strength {}

impl PartialOrd for Strength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Strength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values.cmp(&other.values)
    }
}

impl fmt::Debug for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strength({:?})", self.as_slice())
    }
}

impl Serialize for Strength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// A classified hand with the values that define it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Made {
    StraightFlush([u8; 5]),
    FourOfAKind { quad: u8, kickers: Vec<u8> },
    FullHouse { trip: u8, pair: u8 },
    Flush([u8; 5]),
    Straight([u8; 5]),
    ThreeOfAKind { trip: u8, kickers: Vec<u8> },
    TwoPair { high: u8, low: u8, kickers: Vec<u8> },
    OnePair { pair: u8, kickers: Vec<u8> },
    HighCard(Vec<u8>),
}

impl Made {
    fn classify(cards: &[Card]) -> Made {
        let values = cards.iter().map(Card::value).collect::<Vec<_>>();
        let unique = unique_desc(values.iter().copied());
        let groups = Groups::new(&values);

        // The highest unique values not used by the hand groups.
        let kickers = |used: &[u8], count: usize| {
            unique
                .iter()
                .copied()
                .filter(|v| !used.contains(v))
                .take(count)
                .collect::<Vec<_>>()
        };

        if let Some(run) = best_straight_flush(cards) {
            return Made::StraightFlush(run);
        }

        if let Some(&quad) = groups.quads.first() {
            return Made::FourOfAKind {
                quad,
                kickers: kickers(&[quad], 1),
            };
        }

        // A second trip plays as the pair, when a trip has no companion group
        // the hand falls through to the weaker categories.
        if let Some((&trip, rest)) = groups.trips.split_first() {
            if let Some(&pair) = rest.iter().chain(&groups.pairs).next() {
                return Made::FullHouse { trip, pair };
            }
        }

        if let Some(flush) = best_flush(cards) {
            return Made::Flush(flush);
        }

        if let Some(run) = find_straight(&unique) {
            return Made::Straight(run);
        }

        if let Some(&trip) = groups.trips.first() {
            return Made::ThreeOfAKind {
                trip,
                kickers: kickers(&[trip], 2),
            };
        }

        match groups.pairs[..] {
            [high, low, ..] => Made::TwoPair {
                high,
                low,
                kickers: kickers(&[high, low], 1),
            },
            [pair] => Made::OnePair {
                pair,
                kickers: kickers(&[pair], 3),
            },
            [] => Made::HighCard(kickers(&[], 5)),
        }
    }

    fn category(&self) -> HandCategory {
        match self {
            Made::StraightFlush(_) => HandCategory::StraightFlush,
            Made::FourOfAKind { .. } => HandCategory::FourOfAKind,
            Made::FullHouse { .. } => HandCategory::FullHouse,
            Made::Flush(_) => HandCategory::Flush,
            Made::Straight(_) => HandCategory::Straight,
            Made::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            Made::TwoPair { .. } => HandCategory::TwoPair,
            Made::OnePair { .. } => HandCategory::OnePair,
            Made::HighCard(_) => HandCategory::HighCard,
        }
    }

    /// The values that define the category.
    fn primary(&self) -> Vec<u8> {
        match self {
            Made::StraightFlush(run) | Made::Flush(run) | Made::Straight(run) => run.to_vec(),
            Made::FourOfAKind { quad, .. } => vec![*quad],
            Made::FullHouse { trip, pair } => vec![*trip, *pair],
            Made::ThreeOfAKind { trip, .. } => vec![*trip],
            Made::TwoPair { high, low, .. } => vec![*high, *low],
            Made::OnePair { pair, .. } => vec![*pair],
            Made::HighCard(highs) => highs.clone(),
        }
    }

    fn kickers(&self) -> &[u8] {
        match self {
            Made::FourOfAKind { kickers, .. }
            | Made::ThreeOfAKind { kickers, .. }
            | Made::TwoPair { kickers, .. }
            | Made::OnePair { kickers, .. } => kickers.as_slice(),
            _ => &[],
        }
    }

    fn strength(&self) -> Strength {
        let category = self.category();
        match self {
            // Straights of different suits with the same top card always tie.
            Made::Straight(run) => Strength::new(category, [run[0]]),
            _ => Strength::new(
                category,
                self.primary().into_iter().chain(self.kickers().iter().copied()),
            ),
        }
    }
}

/// Converts values to ranks, the low ace becomes an ace.
fn to_ranks(values: &[u8]) -> Vec<Rank> {
    values.iter().filter_map(|&v| Rank::from_value(v)).collect()
}

/// An evaluated 7 cards hand.
///
/// The primary ranks and the kickers are for display, hands are compared by
/// their [Strength] only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedHand {
    category: HandCategory,
    primary_ranks: Vec<Rank>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    kickers: Vec<Rank>,
    #[serde(rename = "rankVector")]
    strength: Strength,
}

impl EvaluatedHand {
    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The ranks that define the category, for example the four of a kind
    /// rank or the five straight ranks from the highest.
    pub fn primary_ranks(&self) -> &[Rank] {
        &self.primary_ranks
    }

    /// The tie-breaking ranks not in the primary ranks, may be empty.
    pub fn kickers(&self) -> &[Rank] {
        &self.kickers
    }

    /// The hand strength.
    pub fn strength(&self) -> &Strength {
        &self.strength
    }
}

impl EvaluatedHand {
    fn from_made(made: Made) -> Self {
        Self {
            category: made.category(),
            primary_ranks: to_ranks(&made.primary()),
            kickers: to_ranks(made.kickers()),
            strength: made.strength(),
        }
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;

        let join = |ranks: &[Rank]| {
            ranks
                .iter()
                .map(Rank::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };

        write!(f, " [{}]", join(&self.primary_ranks))?;
        if !self.kickers.is_empty() {
            write!(f, " kickers [{}]", join(&self.kickers))?;
        }

        Ok(())
    }
}

/// Evaluates a Texas Hold'em hand of exactly 7 cards.
///
/// Returns [EvalError::HandSize] if the hand doesn't have 7 cards.
///
/// ```
/// # use showdown_eval::*;
/// let cards = ["AH", "KH", "QH", "JH", "10H", "2C", "3D"]
///     .iter()
///     .map(|c| c.parse::<Card>())
///     .collect::<Result<Vec<_>, _>>()?;
/// let hand = evaluate_hand(&cards)?;
/// assert_eq!(hand.category(), HandCategory::StraightFlush);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    if cards.len() != HAND_SIZE {
        return Err(EvalError::HandSize(cards.len()));
    }

    let made = Made::classify(cards);
    trace!("Classified {cards:?} as {made:?}");

    Ok(EvaluatedHand::from_made(made))
}

/// Compares two hands, [Ordering::Greater] if the first is stronger.
pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.strength.cmp(&b.strength)
}
