// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown report.
use crossterm::style::Stylize;
use serde::Serialize;
use std::io::{self, Write};

use showdown_eval::{Card, Deal, Player, TableEvaluation};

/// The JSON report with the dealt cards and the evaluation.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    board: &'a [Card],
    players: &'a [Player],
    #[serde(flatten)]
    evaluation: &'a TableEvaluation,
}

impl<'a> JsonReport<'a> {
    /// Creates a report for a deal and its evaluation.
    pub fn new(deal: &'a Deal, evaluation: &'a TableEvaluation) -> Self {
        Self {
            board: &deal.board,
            players: &deal.players,
            evaluation,
        }
    }
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes a text report, one line for each seat followed by the winners.
pub fn write<W: Write>(
    w: &mut W,
    deal: &Deal,
    table: &TableEvaluation,
    color: bool,
) -> io::Result<()> {
    writeln!(w, "Board: {}", cards_to_string(&deal.board))?;
    writeln!(w)?;
    writeln!(w, "{:>4}  {:<12}{:<8}{:>4}  Hand", "Seat", "Player", "Cards", "Rank")?;

    for player in &deal.players {
        let hand = table
            .hand(player.seat)
            .map(ToString::to_string)
            .unwrap_or_default();
        let rank = table
            .rank(player.seat)
            .map(|r| r.to_string())
            .unwrap_or_default();

        let line = format!(
            "{:>4}  {:<12}{:<8}{:>4}  {}",
            player.seat,
            player.name,
            cards_to_string(&player.cards),
            rank,
            hand
        );

        if color && table.is_winner(player.seat) {
            writeln!(w, "{}", line.as_str().green().bold())?;
        } else {
            writeln!(w, "{line}")?;
        }
    }

    writeln!(w)?;

    if let Some(best) = table.best() {
        let seats = table
            .winners()
            .iter()
            .map(|s| format!("seat {s}"))
            .collect::<Vec<_>>()
            .join(", ");
        let label = if table.winners().len() > 1 {
            "Winners"
        } else {
            "Winner"
        };
        writeln!(w, "{label}: {seats} with {best}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::Seat;

    fn deal() -> Deal {
        let parse = |s: &str| -> Vec<Card> {
            s.split_whitespace().map(|c| c.parse().unwrap()).collect()
        };

        Deal {
            board: parse("KH 8D 5C 3S 2H"),
            players: vec![
                Player::new(Seat::new(1), parse("AD JC")),
                Player::new(Seat::new(2), parse("AS QD")),
                Player::new(Seat::new(3), parse("AC QC")),
            ],
        }
    }

    #[test]
    fn text_report() {
        let deal = deal();
        let table = deal.evaluate().unwrap();

        let mut out = Vec::new();
        write(&mut out, &deal, &table, false).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Board: KH 8D 5C 3S 2H");
        assert_eq!(
            lines[3],
            "   1  Player 1    AD JC      3  High Card [A K J 8 5]"
        );
        assert_eq!(
            lines[4],
            "   2  Player 2    AS QD      1  High Card [A K Q 8 5]"
        );
        assert_eq!(
            lines.last().copied(),
            Some("Winners: seat 2, seat 3 with High Card [A K Q 8 5]")
        );
    }

    #[test]
    fn json_report() {
        let deal = deal();
        let table = deal.evaluate().unwrap();

        let json = serde_json::to_value(JsonReport::new(&deal, &table)).unwrap();
        assert_eq!(json["board"][0], serde_json::json!({"rank": "K", "suit": "hearts"}));
        assert_eq!(json["winners"], serde_json::json!([2, 3]));
        assert_eq!(json["ranks"]["1"], 3);
        assert_eq!(json["best"]["category"], "highCard");
        assert_eq!(
            json["evaluations"][0]["hand"]["rankVector"],
            serde_json::json!([0, 14, 13, 11, 8, 5])
        );
        assert_eq!(
            json["evaluations"][0]["hand"]["primaryRanks"],
            serde_json::json!(["A", "K", "J", "8", "5"])
        );
        assert!(json["evaluations"][0]["hand"].get("kickers").is_none());
    }
}
