// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Texas Hold'em evaluator for 7 cards hands, 2 hole cards and 5 board cards.
//! A hand is classified into a [HandCategory] and given a [Strength] that
//! resolves all the tie-breaks, hands are compared with [compare_hands]:
//!
//! ```
//! # use showdown_eval::*;
//! let parse = |s: &str| -> Vec<Card> {
//!     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
//! };
//!
//! let quads = evaluate_hand(&parse("9H 9D 9C 9S KH 3D 2C")).unwrap();
//! let full_house = evaluate_hand(&parse("QH QD QC JS JH 4D 2C")).unwrap();
//! assert!(compare_hands(&quads, &full_house).is_gt());
//! ```
//!
//! To judge a showdown use [evaluate_table] that evaluates all the players
//! hands, finds the winners, and ranks the players:
//!
//! ```
//! # use showdown_eval::*;
//! let deal = Deal::new(10, &mut rand::rng()).unwrap();
//! let table = evaluate_table(&deal.players, &deal.board).unwrap();
//! for seat in table.winners() {
//!     assert_eq!(table.rank(*seat), Some(1));
//! }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod domain;
pub mod error;
pub mod hand;
pub mod table;

pub use error::EvalError;
pub use hand::{EvaluatedHand, HandCategory, Strength, compare_hands, evaluate_hand};
pub use table::{Deal, Player, Seat, SeatEvaluation, TableEvaluation, evaluate_table};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};
