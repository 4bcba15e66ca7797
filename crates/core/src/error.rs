// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Range notation errors.
use thiserror::Error;

use handrange_cards::ParseCardError;

/// Invalid range notation.
///
/// Each variant carries the token that failed, a single bad token rejects
/// the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRangeError {
    /// A rank character is not one of `23456789TJQKAX`.
    #[error("invalid rank '{rank}' in '{token}'")]
    InvalidRank {
        /// The token being parsed.
        token: String,
        /// The offending character.
        rank: char,
    },
    /// A suit character is not one of `cdhs`.
    #[error("invalid suit '{suit}' in '{token}'")]
    InvalidSuit {
        /// The token being parsed.
        token: String,
        /// The offending character.
        suit: char,
    },
    /// A pocket pair with a `s` or `o` qualifier.
    #[error("pocket pair '{0}' cannot be suited or offsuit")]
    QualifiedPair(String),
    /// A combo naming the same card twice.
    #[error("combo '{0}' has two identical cards")]
    DuplicateCard(String),
    /// The bounds of a `-` range do not describe the same hand group.
    #[error("invalid range bounds in '{0}'")]
    InvalidBound(String),
    /// A token that does not match any notation form.
    #[error("invalid token '{0}'")]
    InvalidToken(String),
}

impl ParseRangeError {
    /// Attaches the token text to a card parsing error.
    pub(crate) fn from_card(token: &str, err: ParseCardError) -> Self {
        match err {
            ParseCardError::InvalidRank(rank) => Self::InvalidRank {
                token: token.to_string(),
                rank,
            },
            ParseCardError::InvalidSuit(suit) => Self::InvalidSuit {
                token: token.to_string(),
                suit,
            },
            ParseCardError::InvalidCard(_) => Self::InvalidToken(token.to_string()),
        }
    }

    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidRank { token, .. } | Self::InvalidSuit { token, .. } => token,
            Self::QualifiedPair(token)
            | Self::DuplicateCard(token)
            | Self::InvalidBound(token)
            | Self::InvalidToken(token) => token,
        }
    }
}
