// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use handrange_cards::{Rank, Suit};

use crate::{Combo, ParseRangeError, parser::Token};

/// The suitedness category of a hand.
///
/// At equal ranks suited hands sort before offsuit hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Two cards of the same rank.
    Pair,
    /// Two ranks of the same suit.
    Suited,
    /// Two ranks of different suits.
    Offsuit,
}

impl Shape {
    /// The number of combos for a hand of this shape.
    pub const fn num_combos(&self) -> usize {
        match self {
            Shape::Pair => 6,
            Shape::Suited => 4,
            Shape::Offsuit => 12,
        }
    }

    /// The qualifier used in the notation.
    pub fn suffix(&self) -> &'static str {
        match self {
            Shape::Pair => "",
            Shape::Suited => "s",
            Shape::Offsuit => "o",
        }
    }
}

/// A starting hand, two ranks and a shape.
///
/// A hand always stands for all the combos of its shape, a pair has 6 combos,
/// a suited hand 4 and an offsuit hand 12. Hands serialize as their text
/// form, e.g. `"AKs"`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand {
    high: Rank,
    low: Rank,
    shape: Shape,
}

impl Hand {
    /// The number of distinct starting hands.
    pub const COUNT: usize = 169;

    /// Creates a hand from two ranks in any order.
    ///
    /// Fails if the ranks are equal and the shape is not [Shape::Pair] or if
    /// the ranks are different and the shape is [Shape::Pair].
    pub fn new(r1: Rank, r2: Rank, shape: Shape) -> Result<Self, ParseRangeError> {
        let (high, low) = (r1.max(r2), r1.min(r2));
        let token = format!("{high}{low}{}", shape.suffix());
        match (high == low, shape) {
            (true, Shape::Pair) | (false, Shape::Suited | Shape::Offsuit) => {
                Ok(Self::from_parts(high, low, shape))
            }
            (true, _) => Err(ParseRangeError::QualifiedPair(token)),
            (false, Shape::Pair) => Err(ParseRangeError::InvalidToken(token)),
        }
    }

    /// Creates a pocket pair.
    pub fn pair(rank: Rank) -> Self {
        Self::from_parts(rank, rank, Shape::Pair)
    }

    /// Creates a hand from ranks and shape the caller knows are consistent.
    pub(crate) fn from_parts(high: Rank, low: Rank, shape: Shape) -> Self {
        debug_assert!(high >= low);
        debug_assert_eq!(high == low, shape == Shape::Pair);
        Self { high, low, shape }
    }

    /// Returns all the 169 hands in ascending order.
    pub fn all() -> impl Iterator<Item = Hand> {
        Rank::ranks().flat_map(|high| {
            Rank::span(Rank::LOWEST, high).flat_map(move |low| {
                let shapes: &[Shape] = if high == low {
                    &[Shape::Pair]
                } else {
                    &[Shape::Suited, Shape::Offsuit]
                };
                shapes
                    .iter()
                    .map(move |shape| Self::from_parts(high, low, *shape))
            })
        })
    }

    /// The higher rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lower rank, equal to the high rank for pairs.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// The hand shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Checks if this hand is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.shape == Shape::Pair
    }

    /// Checks if this is a suited hand.
    pub fn is_suited(&self) -> bool {
        self.shape == Shape::Suited
    }

    /// Checks if this is an offsuit hand.
    pub fn is_offsuit(&self) -> bool {
        self.shape == Shape::Offsuit
    }

    /// The distance between the two ranks.
    pub fn rank_difference(&self) -> u8 {
        self.high.difference(self.low)
    }

    /// Checks if the two ranks are adjacent.
    pub fn is_connector(&self) -> bool {
        self.rank_difference() == 1
    }

    /// Checks if both ranks are ten or higher.
    pub fn is_broadway(&self) -> bool {
        self.low >= Rank::Ten
    }

    /// The number of combos this hand stands for.
    pub fn num_combos(&self) -> usize {
        self.shape.num_combos()
    }

    /// Returns the combos for this hand from weakest to strongest.
    pub fn combos(&self) -> Vec<Combo> {
        let (high, low) = (self.high, self.low);
        let mut combos = Vec::with_capacity(self.num_combos());

        match self.shape {
            Shape::Pair => {
                for s1 in Suit::suits() {
                    for s2 in Suit::suits().filter(|s2| *s2 < s1) {
                        combos.push(Combo::from_parts(high, s1, low, s2));
                    }
                }
            }
            Shape::Suited => {
                for s in Suit::suits() {
                    combos.push(Combo::from_parts(high, s, low, s));
                }
            }
            Shape::Offsuit => {
                for s1 in Suit::suits() {
                    for s2 in Suit::suits().filter(|s2| *s2 != s1) {
                        combos.push(Combo::from_parts(high, s1, low, s2));
                    }
                }
            }
        }

        combos
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.high, self.low, self.shape.suffix())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}

impl FromStr for Hand {
    type Err = ParseRangeError;

    /// Parses a single hand, e.g. `22`, `AKs`, `kao`.
    ///
    /// Two ranks without a qualifier stand for two hands and are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Token>()? {
            Token::Pair(rank) => Ok(Hand::pair(rank)),
            Token::Unpaired { high, low, suits } => match suits.shape() {
                Some(shape) => Ok(Hand::from_parts(high, low, shape)),
                None => Err(ParseRangeError::InvalidToken(s.to_string())),
            },
            _ => Err(ParseRangeError::InvalidToken(s.to_string())),
        }
    }
}

impl TryFrom<String> for Hand {
    type Error = ParseRangeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> String {
        hand.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn hand_num_combos() {
        assert_eq!(hand("22").combos().len(), 6);
        assert_eq!(hand("AKs").combos().len(), 4);
        assert_eq!(hand("AKo").combos().len(), 12);

        let total = Hand::all().map(|h| h.combos().len()).sum::<usize>();
        assert_eq!(total, 1_326);
    }

    #[test]
    fn hand_all() {
        let hands = Hand::all().collect::<Vec<_>>();
        assert_eq!(hands.len(), Hand::COUNT);
        assert!(hands.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(hands[0], hand("22"));
        assert_eq!(hands[Hand::COUNT - 1], hand("AA"));

        let combos = hands
            .iter()
            .flat_map(|h| h.combos())
            .collect::<HashSet<_>>();
        assert_eq!(combos.len(), 1_326);
    }

    #[test]
    fn hand_combos_order() {
        let combos = hand("22")
            .combos()
            .iter()
            .map(|c| format!("{c:?}"))
            .collect::<Vec<_>>();
        assert_eq!(
            combos,
            [
                "Combo(2d2c)",
                "Combo(2h2c)",
                "Combo(2h2d)",
                "Combo(2s2c)",
                "Combo(2s2d)",
                "Combo(2s2h)"
            ]
        );

        for h in Hand::all() {
            let combos = h.combos();
            assert!(combos.windows(2).all(|w| w[0] < w[1]));
            assert!(combos.iter().all(|c| c.to_hand() == h));
        }
    }

    #[test]
    fn hand_ordering() {
        assert!(hand("AKs") < hand("AKo"));
        assert!(hand("AKo") < hand("AA"));
        assert!(hand("84o") < hand("AKs"));
        assert!(hand("KQo") < hand("AKs"));
        assert!(hand("22") < hand("32s"));
    }

    #[test]
    fn hand_from_str() {
        assert_eq!(hand("kaS"), hand("AKs"));
        assert_eq!(hand("48o").to_string(), "84o");
        assert_eq!(hand("tt").to_string(), "TT");
        assert_eq!(format!("{:?}", hand("AKo")), "Hand(AKo)");

        assert!("AK".parse::<Hand>().is_err());
        assert!("KKo".parse::<Hand>().is_err());
        assert!("22+".parse::<Hand>().is_err());
        assert!("AsKs".parse::<Hand>().is_err());
    }

    #[test]
    fn hand_new() {
        assert_eq!(
            Hand::new(Rank::King, Rank::Ace, Shape::Suited),
            Ok(hand("AKs"))
        );
        assert_eq!(
            Hand::new(Rank::King, Rank::King, Shape::Offsuit),
            Err(ParseRangeError::QualifiedPair("KKo".to_string()))
        );
        assert!(Hand::new(Rank::King, Rank::Ace, Shape::Pair).is_err());
    }

    #[test]
    fn hand_properties() {
        assert!(hand("AKs").is_connector());
        assert!(hand("AKs").is_broadway());
        assert!(!hand("A9s").is_broadway());
        assert!(!hand("AA").is_connector());
        assert_eq!(hand("J4o").rank_difference(), 7);
        assert!(hand("TT").is_pair());
        assert!(hand("T9o").is_offsuit());
    }

    #[test]
    fn hand_serde() {
        let json = serde_json::to_string(&hand("AKs")).unwrap();
        assert_eq!(json, "\"AKs\"");
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), hand("AKs"));
        assert_eq!(serde_json::from_str::<Hand>("\"tt\"").unwrap(), hand("TT"));

        assert!(serde_json::from_str::<Hand>("\"AK\"").is_err());
        assert!(serde_json::from_str::<Hand>("\"KKo\"").is_err());
        assert!(
            serde_json::from_str::<Hand>(r#"{"high":"Deuce","low":"Ace","shape":"Pair"}"#)
                .is_err()
        );
    }
}
