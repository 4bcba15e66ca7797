// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Range notation renderer.
//!
//! Compresses a set of combos into the shortest notation that parses back to
//! the same set. Combos are grouped by hand, complete hands are merged into
//! runs of adjacent ranks and written with `+` and `-`, combos of incomplete
//! hands are written one by one.
//!
//! Pieces are written pairs first, then suited and then offsuit hands, each
//! group from the highest rank down:
//!
//! ```text
//!   KK+, 88-44, A♣K♣, KJs, 74s+, K♣J♥, Q♣J♠
//! ```
use std::collections::BTreeMap;

use handrange_cards::Rank;

use crate::{Combo, Hand, Shape};

/// The number of two cards combos in a deck.
pub const FULL_RANGE: usize = 1326;

/// A rendered piece and the key it is sorted by.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Piece {
    high: Rank,
    low: Rank,
    combo: Option<Combo>,
    text: String,
}

/// Renders a set of unique combos into notation pieces.
pub fn pieces<'a>(combos: impl IntoIterator<Item = &'a Combo>) -> Vec<String> {
    let mut buckets = BTreeMap::<Hand, Vec<Combo>>::new();
    let mut count = 0;
    for combo in combos {
        buckets.entry(combo.to_hand()).or_default().push(*combo);
        count += 1;
    }

    if count == FULL_RANGE {
        return vec!["XX".to_string()];
    }

    let mut pairs = Vec::new();
    let mut suited = Vec::new();
    let mut offsuit = Vec::new();

    // Complete hands grouped by shape and high rank, the lows are ascending
    // because the buckets map is sorted.
    let mut complete = BTreeMap::<(Shape, Rank), Vec<Rank>>::new();

    for (hand, combos) in &buckets {
        let group = match hand.shape() {
            Shape::Pair => &mut pairs,
            Shape::Suited => &mut suited,
            Shape::Offsuit => &mut offsuit,
        };

        if combos.len() == hand.num_combos() {
            complete
                .entry((hand.shape(), hand.high()))
                .or_default()
                .push(hand.low());
        } else {
            group.extend(combos.iter().map(|combo| Piece {
                high: hand.high(),
                low: hand.low(),
                combo: Some(*combo),
                text: combo.to_string(),
            }));
        }
    }

    for ((shape, high), lows) in complete {
        match shape {
            Shape::Pair => {}
            Shape::Suited => suited.extend(unpaired_runs(high, &lows, shape)),
            Shape::Offsuit => offsuit.extend(unpaired_runs(high, &lows, shape)),
        }
    }

    let pair_ranks = buckets
        .iter()
        .filter(|(hand, combos)| hand.is_pair() && combos.len() == hand.num_combos())
        .map(|(hand, _)| hand.high())
        .collect::<Vec<_>>();
    pairs.extend(pair_runs(&pair_ranks));

    [pairs, suited, offsuit]
        .into_iter()
        .flat_map(|mut group| {
            group.sort_by(|a, b| b.cmp(a));
            group.into_iter().map(|piece| piece.text)
        })
        .collect()
}

/// Splits ascending ranks into runs of adjacent ranks, returns `(lo, hi)`.
fn runs(ranks: &[Rank]) -> Vec<(Rank, Rank)> {
    let mut runs: Vec<(Rank, Rank)> = Vec::new();
    for &rank in ranks {
        match runs.last_mut() {
            Some((_, hi)) if hi.next() == Some(rank) => *hi = rank,
            _ => runs.push((rank, rank)),
        }
    }

    runs
}

/// Pieces for runs of complete pocket pairs.
fn pair_runs(ranks: &[Rank]) -> Vec<Piece> {
    runs(ranks)
        .into_iter()
        .map(|(lo, hi)| {
            let text = if lo == hi {
                format!("{hi}{hi}")
            } else if hi == Rank::HIGHEST {
                format!("{lo}{lo}+")
            } else if lo == Rank::LOWEST {
                format!("{hi}{hi}-")
            } else {
                format!("{hi}{hi}-{lo}{lo}")
            };

            Piece {
                high: hi,
                low: hi,
                combo: None,
                text,
            }
        })
        .collect()
}

/// Pieces for runs of complete suited or offsuit hands with the same high
/// rank, the runs move the lower rank between deuce and one below the high.
fn unpaired_runs(high: Rank, lows: &[Rank], shape: Shape) -> Vec<Piece> {
    let sfx = shape.suffix();
    runs(lows)
        .into_iter()
        .map(|(lo, hi)| {
            let text = if lo == hi {
                format!("{high}{hi}{sfx}")
            } else if hi.next() == Some(high) {
                format!("{high}{lo}{sfx}+")
            } else if lo == Rank::LOWEST {
                format!("{high}{hi}{sfx}-")
            } else {
                format!("{high}{hi}{sfx}-{high}{lo}{sfx}")
            };

            Piece {
                high,
                low: hi,
                combo: None,
                text,
            }
        })
        .collect()
}
