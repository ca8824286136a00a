// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
//!
//! Deals a table, or reads one from the command line, and prints the
//! showdown result.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, Write};

use showdown_eval::{Card, Deal, Player, Seat};

pub mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players for a random deal.
    #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=23))]
    players: u8,
    /// Seed for a reproducible deal.
    #[clap(long, short)]
    seed: Option<u64>,
    /// The board cards, for example "AH KH QH JH 10H".
    #[clap(long, short, requires = "hole")]
    board: Option<String>,
    /// A player hole cards, for example "2C 3D", repeat for each seat.
    #[clap(long, requires = "board")]
    hole: Vec<String>,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
    /// Disable colors.
    #[clap(long)]
    no_color: bool,
}

/// The showdown configuration.
#[derive(Debug)]
struct Config {
    /// The table to judge, `None` for a random deal.
    table: Option<(Vec<Card>, Vec<Vec<Card>>)>,
    players: usize,
    seed: Option<u64>,
    json: bool,
    color: bool,
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let table = match cli.board {
            Some(board) => {
                let board = parse_cards(&board)?;
                let holes = cli
                    .hole
                    .iter()
                    .map(String::as_str)
                    .map(parse_cards)
                    .collect::<Result<Vec<_>>>()?;
                Some((board, holes))
            }
            None => None,
        };

        Ok(Config {
            table,
            players: cli.players as usize,
            seed: cli.seed,
            json: cli.json,
            color: !cli.no_color && !cli.json,
        })
    }
}

/// Parses space or comma separated cards.
fn parse_cards(s: &str) -> Result<Vec<Card>> {
    let cards = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|c| !c.is_empty())
        .map(|c| c.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    for (idx, card) in cards.iter().enumerate() {
        if cards[..idx].contains(card) {
            bail!("card {card} appears twice in '{s}'");
        }
    }

    Ok(cards)
}

fn run(config: Config) -> Result<()> {
    let deal = match config.table {
        Some((board, holes)) => {
            let players = (1..)
                .zip(holes)
                .map(|(seat, cards)| Player::new(Seat::new(seat), cards))
                .collect::<Vec<_>>();

            let all = players.iter().flat_map(|p| &p.cards).chain(&board);
            for (idx, card) in all.clone().enumerate() {
                if all.clone().skip(idx + 1).any(|c| c == card) {
                    bail!("card {card} is dealt twice");
                }
            }

            Deal { board, players }
        }
        None => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Deal::new(config.players, &mut rng)?
        }
    };

    info!(
        "Judging {} players on board {:?}",
        deal.players.len(),
        deal.board
    );

    let table = deal.evaluate()?;
    info!("Winners {:?}", table.winners());

    let mut stdout = io::stdout().lock();
    if config.json {
        serde_json::to_writer_pretty(&mut stdout, &report::JsonReport::new(&deal, &table))?;
        writeln!(stdout)?;
    } else {
        report::write(&mut stdout, &deal, &table, config.color)?;
    }

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let res = Config::try_from(cli).and_then(run);
    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::{Rank, Suit};

    #[test]
    fn parse_card_lists() {
        let cards = parse_cards("AH, 10d  ks").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::Ten, Suit::Diamonds),
                Card::new(Rank::King, Suit::Spades),
            ]
        );

        assert!(parse_cards("AH XD").is_err());
        assert!(parse_cards("AH AH").is_err());
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn config_from_cli() {
        let cli = Cli::parse_from(["showdown", "--board", "KH 8D 5C 3S 2H", "--hole", "AD JC"]);
        let config = Config::try_from(cli).unwrap();
        let (board, holes) = config.table.unwrap();
        assert_eq!(board.len(), 5);
        assert_eq!(holes, vec![parse_cards("AD JC").unwrap()]);
        assert!(config.color);

        let cli = Cli::parse_from(["showdown", "--players", "4", "--seed", "9", "--json"]);
        let config = Config::try_from(cli).unwrap();
        assert!(config.table.is_none());
        assert_eq!(config.players, 4);
        assert_eq!(config.seed, Some(9));
        assert!(!config.color);

        assert!(Cli::try_parse_from(["showdown", "--players", "24"]).is_err());
        assert!(Cli::try_parse_from(["showdown", "--board", "KH 8D 5C 3S 2H"]).is_err());
    }

    #[test]
    fn duplicate_cards_are_rejected() {
        let config = Config {
            table: Some((
                parse_cards("KH 8D 5C 3S 2H").unwrap(),
                vec![parse_cards("AD JC").unwrap(), parse_cards("KH 9C").unwrap()],
            )),
            players: 2,
            seed: None,
            json: true,
            color: false,
        };

        assert!(run(config).is_err());
    }
}
