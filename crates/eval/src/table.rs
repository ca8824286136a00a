// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table showdown.
//!
//! Evaluates the hands of all the players at a table, finds the winners and
//! ranks the players from the strongest hand.
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

use crate::{
    Card, Deck, EvalError,
    hand::{EvaluatedHand, compare_hands, evaluate_hand},
};

/// The number of cards on the board.
pub const BOARD_SIZE: usize = 5;

/// The number of hole cards for each player.
pub const HOLE_CARDS: usize = 2;

/// A seat at the table, seats are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seat(u32);

impl Seat {
    /// Creates a seat with the given number.
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// The seat number.
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Seat {
    fn from(number: u32) -> Self {
        Seat(number)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A player at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The player seat.
    pub seat: Seat,
    /// The player name.
    pub name: String,
    /// The player hole cards.
    pub cards: Vec<Card>,
}

impl Player {
    /// Creates a player with a default name.
    pub fn new(seat: Seat, cards: Vec<Card>) -> Self {
        Self {
            seat,
            name: format!("Player {seat}"),
            cards,
        }
    }
}

/// The hand of a seat.
#[derive(Debug, Clone, Serialize)]
pub struct SeatEvaluation {
    /// The seat.
    pub seat: Seat,
    /// The seat best hand.
    pub hand: EvaluatedHand,
}

/// The result of a showdown.
#[derive(Debug, Clone, Serialize)]
pub struct TableEvaluation {
    evaluations: Vec<SeatEvaluation>,
    winners: Vec<Seat>,
    best: Option<EvaluatedHand>,
    ranks: BTreeMap<Seat, usize>,
}

impl TableEvaluation {
    /// The hands in the same order as the players.
    pub fn evaluations(&self) -> &[SeatEvaluation] {
        &self.evaluations
    }

    /// The hand of a seat.
    pub fn hand(&self, seat: Seat) -> Option<&EvaluatedHand> {
        self.evaluations
            .iter()
            .find(|e| e.seat == seat)
            .map(|e| &e.hand)
    }

    /// The seats with the best hand, more than one if the best hand is tied.
    pub fn winners(&self) -> &[Seat] {
        &self.winners
    }

    /// Checks if a seat is one of the winners.
    pub fn is_winner(&self, seat: Seat) -> bool {
        self.winners.contains(&seat)
    }

    /// The best hand, `None` if there are no players.
    pub fn best(&self) -> Option<&EvaluatedHand> {
        self.best.as_ref()
    }

    /// The rank of a seat, the winners have rank 1.
    pub fn rank(&self, seat: Seat) -> Option<usize> {
        self.ranks.get(&seat).copied()
    }

    /// The ranks of all the seats.
    pub fn ranks(&self) -> &BTreeMap<Seat, usize> {
        &self.ranks
    }
}

/// Evaluates the hands of all the players for the given board.
///
/// Tied hands share the same rank and the next hand rank is its position in
/// the sorted hands, so two tied winners are followed by a rank 3.
///
/// Returns an error if the board doesn't have 5 cards or a player doesn't
/// have 2 hole cards.
pub fn evaluate_table(players: &[Player], board: &[Card]) -> Result<TableEvaluation, EvalError> {
    if board.len() != BOARD_SIZE {
        return Err(EvalError::BoardSize(board.len()));
    }

    let evaluations = players
        .iter()
        .map(|player| {
            if player.cards.len() != HOLE_CARDS {
                return Err(EvalError::HoleCards {
                    seat: player.seat,
                    count: player.cards.len(),
                });
            }

            let cards = board
                .iter()
                .chain(&player.cards)
                .copied()
                .collect::<Vec<_>>();
            let hand = evaluate_hand(&cards)?;
            debug!("Seat {} {:?} {hand}", player.seat, player.cards);

            Ok(SeatEvaluation {
                seat: player.seat,
                hand,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Strongest first, the sort is stable so tied seats keep the players order.
    let mut sorted = evaluations.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| compare_hands(&b.hand, &a.hand));

    let best = sorted.first().map(|e| e.hand.clone());
    let winners = match &best {
        Some(best) => sorted
            .iter()
            .take_while(|e| compare_hands(&e.hand, best).is_eq())
            .map(|e| e.seat)
            .collect(),
        None => Vec::new(),
    };

    let mut ranks = BTreeMap::new();
    let mut rank = 1;
    for (idx, e) in sorted.iter().enumerate() {
        if idx > 0 && compare_hands(&e.hand, &sorted[idx - 1].hand).is_ne() {
            rank = idx + 1;
        }

        ranks.insert(e.seat, rank);
    }

    Ok(TableEvaluation {
        evaluations,
        winners,
        best,
        ranks,
    })
}

/// A dealt table, the board and the players hole cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// The board cards.
    pub board: Vec<Card>,
    /// The players.
    pub players: Vec<Player>,
}

impl Deal {
    /// The default number of players.
    pub const DEFAULT_PLAYERS: usize = 10;

    /// The maximum number of players a deck can serve.
    pub const MAX_PLAYERS: usize = (Deck::SIZE - BOARD_SIZE) / HOLE_CARDS;

    /// Deals the board and the hole cards from a shuffled deck.
    pub fn new<R: Rng>(players: usize, rng: &mut R) -> Result<Self, EvalError> {
        if !(1..=Self::MAX_PLAYERS).contains(&players) {
            return Err(EvalError::TooManyPlayers(players));
        }

        let mut cards = Deck::new_and_shuffled(rng).into_iter();
        let board = cards.by_ref().take(BOARD_SIZE).collect();
        let players = (1..=players as u32)
            .map(|seat| {
                let hole = cards.by_ref().take(HOLE_CARDS).collect();
                Player::new(Seat::new(seat), hole)
            })
            .collect();

        Ok(Self { board, players })
    }

    /// Evaluates this table.
    pub fn evaluate(&self) -> Result<TableEvaluation, EvalError> {
        evaluate_table(&self.players, &self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandCategory;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn players(hands: &[&str]) -> Vec<Player> {
        hands
            .iter()
            .zip(1..)
            .map(|(hand, seat)| Player::new(Seat::new(seat), cards(hand)))
            .collect()
    }

    #[test]
    fn tied_winners_and_ranks() {
        let board = cards("KH 8D 5C 3S 2H");
        let players = players(&[
            "AD JC", "QH JH", "AS QD", "JD 10C", "10D 9C", "9D 7C", "AC QC", "7D 6C", "AH 10H",
            "JS 9S",
        ]);

        let table = evaluate_table(&players, &board).unwrap();
        assert_eq!(table.evaluations().len(), 10);
        assert_eq!(table.winners(), &[Seat::new(3), Seat::new(7)]);
        assert!(table.is_winner(Seat::new(7)));
        assert!(!table.is_winner(Seat::new(1)));

        let best = table.best().unwrap();
        assert_eq!(best.category(), HandCategory::HighCard);
        assert_eq!(best.strength().as_slice(), &[0, 14, 13, 12, 8, 5]);

        let ranks = [3, 5, 1, 6, 8, 9, 1, 10, 4, 7];
        for (seat, rank) in (1..).zip(ranks) {
            assert_eq!(table.rank(Seat::new(seat)), Some(rank), "seat {seat}");
        }
    }

    #[test]
    fn single_winner() {
        let board = cards("AH KH QH 7D 2C");
        let players = players(&["JH 10H", "AS AD", "KC QC"]);

        let table = evaluate_table(&players, &board).unwrap();
        assert_eq!(table.winners(), &[Seat::new(1)]);
        assert_eq!(
            table.hand(Seat::new(1)).unwrap().category(),
            HandCategory::StraightFlush
        );
        assert_eq!(
            table.hand(Seat::new(2)).unwrap().category(),
            HandCategory::ThreeOfAKind
        );
        assert_eq!(table.rank(Seat::new(1)), Some(1));
        assert_eq!(table.rank(Seat::new(2)), Some(2));
        assert_eq!(table.rank(Seat::new(3)), Some(3));
    }

    #[test]
    fn board_plays() {
        // Everybody plays the board straight.
        let board = cards("10H JD QS KC AH");
        let players = players(&["2C 3D", "4S 5S", "9H 9D"]);

        let table = evaluate_table(&players, &board).unwrap();
        assert_eq!(table.winners().len(), 3);
        assert!(table.ranks().values().all(|&r| r == 1));
    }

    #[test]
    fn tie_below_the_winner() {
        let board = cards("KH 8D 5C 3S 2H");
        let players = players(&["AD JC", "QH JH", "QD JS", "AS 9C"]);

        let table = evaluate_table(&players, &board).unwrap();
        assert_eq!(table.winners(), &[Seat::new(1)]);
        assert_eq!(table.rank(Seat::new(1)), Some(1));
        assert_eq!(table.rank(Seat::new(4)), Some(2));
        assert_eq!(table.rank(Seat::new(2)), Some(3));
        assert_eq!(table.rank(Seat::new(3)), Some(3));
    }

    #[test]
    fn no_players() {
        let table = evaluate_table(&[], &cards("KH 8D 5C 3S 2H")).unwrap();
        assert!(table.winners().is_empty());
        assert!(table.best().is_none());
        assert!(table.ranks().is_empty());
    }

    #[test]
    fn wrong_cards() {
        let players = players(&["AD JC", "QH"]);

        let res = evaluate_table(&players, &cards("KH 8D 5C 3S"));
        assert_eq!(res.unwrap_err(), EvalError::BoardSize(4));

        let res = evaluate_table(&players, &cards("KH 8D 5C 3S 2H"));
        assert_eq!(
            res.unwrap_err(),
            EvalError::HoleCards {
                seat: Seat::new(2),
                count: 1
            }
        );
    }

    #[test]
    fn deal_table() {
        let mut rng = StdRng::seed_from_u64(101);
        let deal = Deal::new(Deal::DEFAULT_PLAYERS, &mut rng).unwrap();
        assert_eq!(deal.board.len(), BOARD_SIZE);
        assert_eq!(deal.players.len(), Deal::DEFAULT_PLAYERS);

        let mut seen = deal.board.iter().copied().collect::<HashSet<_>>();
        for (player, seat) in deal.players.iter().zip(1..) {
            assert_eq!(player.seat, Seat::new(seat));
            assert_eq!(player.name, format!("Player {seat}"));
            assert_eq!(player.cards.len(), HOLE_CARDS);
            seen.extend(player.cards.iter().copied());
        }
        assert_eq!(seen.len(), BOARD_SIZE + HOLE_CARDS * Deal::DEFAULT_PLAYERS);

        // Same seed same deal.
        let again = Deal::new(Deal::DEFAULT_PLAYERS, &mut StdRng::seed_from_u64(101)).unwrap();
        assert_eq!(deal, again);

        let table = deal.evaluate().unwrap();
        assert!(!table.winners().is_empty());
        assert_eq!(table.ranks().len(), Deal::DEFAULT_PLAYERS);
        for seat in table.winners() {
            assert_eq!(table.rank(*seat), Some(1));
        }
    }

    #[test]
    fn deal_limits() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Deal::MAX_PLAYERS, 23);
        assert!(Deal::new(Deal::MAX_PLAYERS, &mut rng).is_ok());
        assert_eq!(
            Deal::new(0, &mut rng).unwrap_err(),
            EvalError::TooManyPlayers(0)
        );
        assert_eq!(
            Deal::new(24, &mut rng).unwrap_err(),
            EvalError::TooManyPlayers(24)
        );
    }
}
