// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards, ranks, suits and the deck.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card has no identity beyond its rank and suit, two cards with the same
/// rank and suit are interchangeable.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card rank value, deuce is 2 and ace is 14.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error returned when parsing a card, rank or suit from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank symbol is not one of 2-10, T, J, Q, K, A.
    #[error("invalid rank '{0}'")]
    Rank(String),
    /// The suit symbol is not one of C, D, H, S.
    #[error("invalid suit '{0}'")]
    Suit(String),
    /// The card text is too short to hold a rank and a suit.
    #[error("invalid card '{0}'")]
    Card(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `AH`, `10c`, `Ts` or `9♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (idx, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| ParseCardError::Card(s.to_string()))?;
        if idx == 0 {
            return Err(ParseCardError::Card(s.to_string()));
        }

        let (rank, suit) = s.split_at(idx);
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

/// Card rank.
///
/// The discriminant is the rank value used for ordering hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    #[serde(rename = "2")]
    Deuce = 2,
    /// Trey
    #[serde(rename = "3")]
    Trey,
    /// Four
    #[serde(rename = "4")]
    Four,
    /// Five
    #[serde(rename = "5")]
    Five,
    /// Six
    #[serde(rename = "6")]
    Six,
    /// Seven
    #[serde(rename = "7")]
    Seven,
    /// Eight
    #[serde(rename = "8")]
    Eight,
    /// Nine
    #[serde(rename = "9")]
    Nine,
    /// Ten
    #[serde(rename = "10")]
    Ten,
    /// Jack
    #[serde(rename = "J")]
    Jack,
    /// Queen
    #[serde(rename = "Q")]
    Queen,
    /// King
    #[serde(rename = "K")]
    King,
    /// Ace
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// The value of an ace when it plays low in a wheel straight.
    pub const ACE_LOW: u8 = 1;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank value from 2 to 14.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank for a value, both 1 and 14 map to the ace.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            Self::ACE_LOW => Some(Rank::Ace),
            2..=14 => Self::ranks().nth(value as usize - 2),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        f.write_str(rank)
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "C" | "c" | "♣" | "♧" => Suit::Clubs,
            "D" | "d" | "♦" | "♢" => Suit::Diamonds,
            "H" | "h" | "♥" | "♡" => Suit::Hearts,
            "S" | "s" | "♠" | "♤" => Suit::Spades,
            _ => return Err(ParseCardError::Suit(s.to_string())),
        };

        Ok(suit)
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Indices of the current k-subset in lexicographic order.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[pos] += 1;
            hand[pos] = self.cards[idx[pos]];
            for i in pos + 1..k {
                idx[i] = idx[i - 1] + 1;
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().rev().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
