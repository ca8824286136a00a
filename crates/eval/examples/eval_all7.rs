// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release -p showdown-eval --example eval_all7
// ...
// High Card:       23294460
// One  Pair:       58627800
// Two Pairs:       31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```
//
// or with `-- --sample 1000000` to evaluate random hands only.
use clap::Parser;
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Evaluate this many random hands instead of all the 7 cards hands.
    #[clap(long, short)]
    sample: Option<usize>,
}

/// Reference counts for all the 133,784,560 7 cards hands.
const EXPECTED: [usize; 9] = [
    23_294_460, 58_627_800, 31_433_400, 6_461_620, 6_180_020, 4_047_644, 3_473_184, 224_848,
    41_584,
];

fn main() {
    let cli = Cli::parse();

    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut count = |hand: &[Card]| {
        if let Ok(hand) = evaluate_hand(hand) {
            counts[hand.category() as usize] += 1;
        }
    };

    match cli.sample {
        Some(n) => {
            let mut rng = rand::rng();
            for _ in 0..n {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                let hand = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();
                count(&hand);
            }
        }
        None => Deck::default().for_each(7, |hand| count(hand)),
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let n = counts[category as usize];
        let name = format!("{category}:");
        if cli.sample.is_none() && n != EXPECTED[category as usize] {
            println!("{name:<17}{n} expected {}", EXPECTED[category as usize]);
        } else {
            println!("{name:<17}{n}");
        }
    }
}
