// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Range notation parser.
//!
//! A range is a list of tokens separated by whitespace or commas, each token
//! is parsed into a [Token] and expanded into the combos it stands for:
//!
//! ```text
//!   XX          every combo
//!   QQ          one pocket pair
//!   QQ+         pairs from QQ up to AA
//!   QQ-         pairs from QQ down to 22
//!   QQ-77       pairs from QQ down to 77, bounds in any order
//!   AK          AKs and AKo
//!   AKs AKo     one suited or offsuit hand
//!   A9s+        A9s up to AKs, the lower rank moves
//!   A9s-        A9s down to A2s
//!   A9o-A5o     A9o down to A5o
//!   KX KXs KXo  a king with any lower rank, 2X is invalid
//!   AsKc        one combo
//! ```
//!
//! Ranks, suits and qualifiers are case insensitive.
use ahash::AHashSet;
use std::str::FromStr;

use handrange_cards::{Deck, Rank, Suit};

use crate::{Combo, Hand, ParseRangeError, Shape};

/// The suitedness qualifier of an unpaired token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suitedness {
    /// Trailing `s`.
    Suited,
    /// Trailing `o`.
    Offsuit,
    /// No qualifier, both suited and offsuit.
    Both,
}

impl Suitedness {
    /// The hand shapes this qualifier selects.
    pub fn shapes(&self) -> &'static [Shape] {
        match self {
            Suitedness::Suited => &[Shape::Suited],
            Suitedness::Offsuit => &[Shape::Offsuit],
            Suitedness::Both => &[Shape::Suited, Shape::Offsuit],
        }
    }

    /// The single shape this qualifier selects, `None` for [Suitedness::Both].
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Suitedness::Suited => Some(Shape::Suited),
            Suitedness::Offsuit => Some(Shape::Offsuit),
            Suitedness::Both => None,
        }
    }
}

/// A parsed range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `XX`, all the 1326 combos.
    AnyTwo,
    /// `QQ`
    Pair(Rank),
    /// `QQ+`
    PairPlus(Rank),
    /// `QQ-`
    PairMinus(Rank),
    /// `QQ-77`
    PairRange(Rank, Rank),
    /// `AK`, `AKs`, `AKo`
    Unpaired {
        /// The fixed higher rank.
        high: Rank,
        /// The lower rank.
        low: Rank,
        /// The qualifier.
        suits: Suitedness,
    },
    /// `A9s+`
    UnpairedPlus {
        /// The fixed higher rank.
        high: Rank,
        /// The lowest of the lower ranks.
        low: Rank,
        /// The qualifier.
        suits: Suitedness,
    },
    /// `A9s-`
    UnpairedMinus {
        /// The fixed higher rank.
        high: Rank,
        /// The highest of the lower ranks.
        low: Rank,
        /// The qualifier.
        suits: Suitedness,
    },
    /// `A9s-A5s`
    UnpairedRange {
        /// The fixed higher rank.
        high: Rank,
        /// One bound of the lower rank.
        low: Rank,
        /// The other bound of the lower rank.
        other: Rank,
        /// The qualifier.
        suits: Suitedness,
    },
    /// `KX`, `KXs`, `KXo`
    Wildcard {
        /// The fixed rank.
        rank: Rank,
        /// The qualifier.
        suits: Suitedness,
    },
    /// `AsKc`
    Combo(Combo),
}

/// The two ranks and qualifier at the start of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Head {
    Pair(Rank),
    Unpaired {
        high: Rank,
        low: Rank,
        suits: Suitedness,
    },
    Wildcard {
        rank: Rank,
        suits: Suitedness,
    },
}

impl Token {
    /// The hands this token stands for, empty for [Token::AnyTwo] and
    /// [Token::Combo] that are not expressed as hands.
    pub fn hands(&self) -> Vec<Hand> {
        match *self {
            Token::AnyTwo | Token::Combo(_) => Vec::new(),
            Token::Pair(rank) => vec![Hand::pair(rank)],
            Token::PairPlus(rank) => Rank::span(rank, Rank::HIGHEST).map(Hand::pair).collect(),
            Token::PairMinus(rank) => Rank::span(Rank::LOWEST, rank).map(Hand::pair).collect(),
            Token::PairRange(r1, r2) => Rank::span(r1.min(r2), r1.max(r2))
                .map(Hand::pair)
                .collect(),
            Token::Unpaired { high, low, suits } => {
                unpaired(high, Rank::span(low, low), suits).collect()
            }
            Token::UnpairedPlus { high, low, suits } => {
                unpaired(high, Rank::span(low, high), suits).collect()
            }
            Token::UnpairedMinus { high, low, suits } => {
                unpaired(high, Rank::span(Rank::LOWEST, low), suits).collect()
            }
            Token::UnpairedRange {
                high,
                low,
                other,
                suits,
            } => unpaired(high, Rank::span(low.min(other), low.max(other)), suits).collect(),
            Token::Wildcard { rank, suits } => {
                unpaired(rank, Rank::span(Rank::LOWEST, rank), suits).collect()
            }
        }
    }

    /// Adds the combos for this token to the set.
    pub fn expand(&self, combos: &mut AHashSet<Combo>) {
        match *self {
            Token::AnyTwo => Deck::default().for_each_pair(|c1, c2| {
                combos.insert(Combo::from_cards(c1, c2));
            }),
            Token::Combo(combo) => {
                combos.insert(combo);
            }
            _ => {
                for hand in self.hands() {
                    combos.extend(hand.combos());
                }
            }
        }
    }
}

/// The hands with a fixed high rank for each lower rank below it.
fn unpaired(
    high: Rank,
    lows: impl Iterator<Item = Rank>,
    suits: Suitedness,
) -> impl Iterator<Item = Hand> {
    lows.filter(move |low| *low < high).flat_map(move |low| {
        suits
            .shapes()
            .iter()
            .map(move |shape| Hand::from_parts(high, low, *shape))
    })
}

impl FromStr for Token {
    type Err = ParseRangeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.eq_ignore_ascii_case("xx") {
            return Ok(Token::AnyTwo);
        }

        let chars = token.chars().collect::<Vec<_>>();

        // A suit in second position can only be a combo.
        if chars.len() == 4 && Suit::from_char(chars[1]).is_ok() {
            return Ok(Token::Combo(token.parse()?));
        }

        let (head, rest) = parse_head(token, &chars)?;
        match (head, rest) {
            (head, []) => Ok(match head {
                Head::Pair(rank) => Token::Pair(rank),
                Head::Unpaired { high, low, suits } => Token::Unpaired { high, low, suits },
                Head::Wildcard { rank, suits } => Token::Wildcard { rank, suits },
            }),
            (Head::Pair(rank), ['+']) => Ok(Token::PairPlus(rank)),
            (Head::Pair(rank), ['-']) => Ok(Token::PairMinus(rank)),
            (Head::Unpaired { high, low, suits }, ['+']) => {
                Ok(Token::UnpairedPlus { high, low, suits })
            }
            (Head::Unpaired { high, low, suits }, ['-']) => {
                Ok(Token::UnpairedMinus { high, low, suits })
            }
            (head @ (Head::Pair(_) | Head::Unpaired { .. }), ['-', bound @ ..]) => {
                match (head, parse_head(token, bound)?) {
                    (Head::Pair(r1), (Head::Pair(r2), [])) => Ok(Token::PairRange(r1, r2)),
                    (
                        Head::Unpaired { high, low, suits },
                        (
                            Head::Unpaired {
                                high: other_high,
                                low: other,
                                suits: other_suits,
                            },
                            [],
                        ),
                    ) if high == other_high && suits == other_suits => Ok(Token::UnpairedRange {
                        high,
                        low,
                        other,
                        suits,
                    }),
                    _ => Err(ParseRangeError::InvalidBound(token.to_string())),
                }
            }
            _ => Err(ParseRangeError::InvalidToken(token.to_string())),
        }
    }
}

/// Parses two ranks and an optional qualifier, returns the remaining chars.
fn parse_head<'a>(token: &str, chars: &'a [char]) -> Result<(Head, &'a [char]), ParseRangeError> {
    let [c1, c2, rest @ ..] = chars else {
        return Err(ParseRangeError::InvalidToken(token.to_string()));
    };

    let rank = |c: char| -> Result<Option<Rank>, ParseRangeError> {
        if c.eq_ignore_ascii_case(&'x') {
            Ok(None)
        } else {
            Rank::from_char(c)
                .map(Some)
                .map_err(|e| ParseRangeError::from_card(token, e))
        }
    };

    let (r1, r2) = (rank(*c1)?, rank(*c2)?);

    let (suits, rest) = match rest {
        [q, rest @ ..] if q.eq_ignore_ascii_case(&'s') => (Suitedness::Suited, rest),
        [q, rest @ ..] if q.eq_ignore_ascii_case(&'o') => (Suitedness::Offsuit, rest),
        _ => (Suitedness::Both, rest),
    };

    let head = match (r1, r2) {
        (Some(r1), Some(r2)) if r1 == r2 => {
            if suits != Suitedness::Both {
                return Err(ParseRangeError::QualifiedPair(token.to_string()));
            }
            Head::Pair(r1)
        }
        (Some(r1), Some(r2)) => Head::Unpaired {
            high: r1.max(r2),
            low: r1.min(r2),
            suits,
        },
        // A deuce has no lower rank to pair with.
        (Some(Rank::Deuce), None) | (None, Some(Rank::Deuce)) => {
            return Err(ParseRangeError::InvalidToken(token.to_string()));
        }
        (Some(rank), None) | (None, Some(rank)) => Head::Wildcard { rank, suits },
        (None, None) => return Err(ParseRangeError::InvalidToken(token.to_string())),
    };

    Ok((head, rest))
}

/// Splits range notation into tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// Parses range notation into the set of combos it stands for.
///
/// Empty or blank text gives an empty set, any invalid token fails the whole
/// parse.
pub fn parse(text: &str) -> Result<AHashSet<Combo>, ParseRangeError> {
    let mut combos = AHashSet::new();
    for token in tokenize(text) {
        token.parse::<Token>()?.expand(&mut combos);
    }

    Ok(combos)
}
