// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::table::Seat;

/// Error returned when the cards given to the evaluator are malformed.
///
/// These errors are caused by the caller passing the wrong number of cards,
/// they are not recoverable and the evaluation should not be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand must have exactly 7 cards.
    #[error("Texas Hold'em evaluation expects 7 cards, got {0}")]
    HandSize(usize),
    /// A board must have exactly 5 cards.
    #[error("the board must have 5 cards, got {0}")]
    BoardSize(usize),
    /// A seat must have exactly 2 hole cards.
    #[error("seat {seat} must have 2 hole cards, got {count}")]
    HoleCards {
        /// The seat with the wrong cards.
        seat: Seat,
        /// The number of cards the seat has.
        count: usize,
    },
    /// The deck cannot serve the requested number of players.
    #[error("cannot deal a table for {0} players")]
    TooManyPlayers(usize),
}
