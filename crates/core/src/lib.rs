// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand range notation.
//!
//! This crate parses the compact notation used to describe sets of two cards
//! starting hands into a [Range] of concrete combos, and renders a range back
//! into the shortest notation:
//!
//! ```
//! # use handrange_core::{Hand, Range};
//! let range: Range = "22-55 KJs+ kx AsKc".parse().unwrap();
//! assert_eq!(range.to_string(), "55-, K2s+, A♠K♣, K2o+");
//! assert_eq!(range.len(), 4 * 6 + 11 * 16 + 1);
//! assert!(range.hands().contains(&"KJs".parse::<Hand>().unwrap()));
//!
//! // Rendering is lossless.
//! assert_eq!(range, range.to_string().parse::<Range>().unwrap());
//! ```
//!
//! A single invalid token rejects the whole input:
//!
//! ```
//! # use handrange_core::{ParseRangeError, Range};
//! let err = "22+ AKo KKo".parse::<Range>().unwrap_err();
//! assert_eq!(err, ParseRangeError::QualifiedPair("KKo".to_string()));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod combo;
mod error;
mod hand;
pub mod parser;
mod range;
pub mod render;

pub use combo::Combo;
pub use error::ParseRangeError;
pub use hand::{Hand, Shape};
pub use range::Range;

// Reexport cards types.
pub use handrange_cards::{Card, Deck, Rank, Suit};
