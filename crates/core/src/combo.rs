// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two cards combinations.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

use handrange_cards::{Card, Rank, Suit};

use crate::{Hand, ParseRangeError, Shape};

/// An unordered pair of two distinct cards.
///
/// The cards are stored with the higher rank first, and for pocket pairs with
/// the higher suit first, so that two combos made of the same cards are equal
/// no matter the order they were given in.
///
/// Combos serialize as their text form, e.g. `"A♠K♣"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Combo {
    first: Card,
    second: Card,
}

impl Combo {
    /// Creates a combo from two different cards.
    pub fn new(c1: Card, c2: Card) -> Result<Self, ParseRangeError> {
        if c1 == c2 {
            return Err(ParseRangeError::DuplicateCard(format!(
                "{}{}{}{}",
                c1.rank(),
                c1.suit(),
                c2.rank(),
                c2.suit()
            )));
        }

        Ok(Self::from_cards(c1, c2))
    }

    /// Creates a combo from two cards the caller knows are different.
    pub(crate) fn from_cards(c1: Card, c2: Card) -> Self {
        debug_assert_ne!(c1, c2);
        if c1 > c2 {
            Self {
                first: c1,
                second: c2,
            }
        } else {
            Self {
                first: c2,
                second: c1,
            }
        }
    }

    /// Creates a combo from ranks and suits the caller knows are different.
    pub(crate) fn from_parts(r1: Rank, s1: Suit, r2: Rank, s2: Suit) -> Self {
        Self::from_cards(Card::new(r1, s1), Card::new(r2, s2))
    }

    /// The higher card.
    pub fn first(&self) -> Card {
        self.first
    }

    /// The lower card.
    pub fn second(&self) -> Card {
        self.second
    }

    /// The shape of this combo.
    pub fn shape(&self) -> Shape {
        if self.first.rank() == self.second.rank() {
            Shape::Pair
        } else if self.first.suit() == self.second.suit() {
            Shape::Suited
        } else {
            Shape::Offsuit
        }
    }

    /// Checks if this combo is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.shape() == Shape::Pair
    }

    /// Checks if both cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.shape() == Shape::Suited
    }

    /// Checks if the cards have different ranks and different suits.
    pub fn is_offsuit(&self) -> bool {
        self.shape() == Shape::Offsuit
    }

    /// The hand this combo belongs to.
    pub fn to_hand(&self) -> Hand {
        Hand::from_parts(self.first.rank(), self.second.rank(), self.shape())
    }

    /// The key this combo is sorted by.
    ///
    /// Combos are sorted by their hand and then by suits, for pocket pairs the
    /// suits key is `(max, min)` so that from weakest to strongest the deuces
    /// sort as `2d2c 2h2c 2h2d 2s2c 2s2d 2s2h`.
    fn strength(&self) -> (Rank, Rank, Shape, Suit, Suit) {
        (
            self.first.rank(),
            self.second.rank(),
            self.shape(),
            self.first.suit(),
            self.second.suit(),
        )
    }
}

impl Ord for Combo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl PartialOrd for Combo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl fmt::Debug for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Combo({}{}{}{})",
            self.first.rank(),
            self.first.suit(),
            self.second.rank(),
            self.second.suit()
        )
    }
}

impl FromStr for Combo {
    type Err = ParseRangeError;

    /// Parses a combo from two cards, e.g. `AsKc`, `2c2s` or `A♠K♣`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().collect::<Vec<_>>();
        if chars.len() != 4 {
            return Err(ParseRangeError::InvalidToken(s.to_string()));
        }

        let card = |rank: char, suit: char| {
            let rank = Rank::from_char(rank).map_err(|e| ParseRangeError::from_card(s, e))?;
            let suit = Suit::from_char(suit).map_err(|e| ParseRangeError::from_card(s, e))?;
            Ok::<_, ParseRangeError>(Card::new(rank, suit))
        };

        let c1 = card(chars[0], chars[1])?;
        let c2 = card(chars[2], chars[3])?;
        if c1 == c2 {
            return Err(ParseRangeError::DuplicateCard(s.to_string()));
        }

        Ok(Self::from_cards(c1, c2))
    }
}

impl TryFrom<String> for Combo {
    type Error = ParseRangeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Combo> for String {
    fn from(combo: Combo) -> String {
        combo.to_string()
    }
}
