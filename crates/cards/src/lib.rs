// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand range cards types.
//!
//! This crate define the types used to name cards:
//!
//! ```
//! # use handrange_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert!(ah > kd);
//! assert_eq!(ah.to_string(), "A♥");
//! ```
//!
//! and a [Deck] type for iterating the cards in the deck, for example to
//! visit all the 2-cards hands:
//!
//! ```
//! # use handrange_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each_pair(|c1, c2| {
//!     assert_ne!(c1, c2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_326);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
