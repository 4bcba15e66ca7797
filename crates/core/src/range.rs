// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranges.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{cmp::Ordering, fmt, str::FromStr};

use handrange_cards::Rank;

use crate::{Combo, Hand, ParseRangeError, Shape, parser, render};

/// A set of starting hands combos.
///
/// The combos are the only state of a range, hands, percentage and notation
/// are derived from them. A range never changes after it has been created.
///
/// ```
/// # use handrange_core::Range;
/// let range: Range = "22+ AKs AsKc".parse().unwrap();
/// assert_eq!(range.len(), 6 * 13 + 4 + 1);
/// assert_eq!(range.to_string(), "22+, AKs, A♠K♣");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Range {
    /// Sorted and unique.
    combos: Vec<Combo>,
}

impl Range {
    /// Creates an empty range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a range with all the combos of the given hands.
    pub fn from_hands(hands: impl IntoIterator<Item = Hand>) -> Self {
        Self::from_combos(hands.into_iter().flat_map(|hand| hand.combos()))
    }

    /// Creates a range with the given combos, duplicates are ignored.
    pub fn from_combos(combos: impl IntoIterator<Item = Combo>) -> Self {
        let mut combos = combos.into_iter().collect::<Vec<_>>();
        combos.sort_unstable();
        combos.dedup();
        Self { combos }
    }

    /// The combos from weakest to strongest.
    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    /// The hands with all their combos in this range, in ascending order.
    ///
    /// Combos of partially covered hands are not reported as hands.
    pub fn hands(&self) -> Vec<Hand> {
        self.combos
            .chunk_by(|c1, c2| c1.to_hand() == c2.to_hand())
            .filter_map(|chunk| {
                let hand = chunk[0].to_hand();
                (chunk.len() == hand.num_combos()).then_some(hand)
            })
            .collect()
    }

    /// The number of combos.
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    /// Checks if this range has no combos.
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// Checks if the combo is in this range.
    pub fn contains(&self, combo: &Combo) -> bool {
        self.combos.binary_search(combo).is_ok()
    }

    /// Checks if all the combos of a hand are in this range.
    pub fn contains_hand(&self, hand: &Hand) -> bool {
        hand.combos().iter().all(|combo| self.contains(combo))
    }

    /// The percentage of all the two cards combos in this range, rounded to
    /// two decimal places.
    pub fn percent(&self) -> f64 {
        let pct = (self.len() * 100 * 100) as f64 / render::FULL_RANGE as f64;
        pct.round() / 100.0
    }

    /// The notation pieces for this range.
    pub fn rep_pieces(&self) -> Vec<String> {
        render::pieces(&self.combos)
    }

    /// Renders the hands in a 13x13 grid with pairs on the diagonal, suited
    /// hands above and offsuit hands below.
    ///
    /// Only hands with all their combos in the range are shown.
    pub fn to_ascii(&self, border: bool) -> String {
        let hands = self.hands();
        let separator = format!("|{}", "-----|".repeat(13));
        let mut lines = Vec::with_capacity(27);

        if border {
            lines.push(separator.clone());
        }

        for r1 in Rank::ranks().rev() {
            let labels = Rank::ranks().rev().map(|r2| {
                let hand = match r1.cmp(&r2) {
                    Ordering::Equal => Hand::pair(r1),
                    Ordering::Greater => Hand::from_parts(r1, r2, Shape::Suited),
                    Ordering::Less => Hand::from_parts(r2, r1, Shape::Offsuit),
                };

                if hands.binary_search(&hand).is_ok() {
                    format!("{:<3}", hand.to_string())
                } else {
                    "   ".to_string()
                }
            });

            if border {
                let cells = labels.map(|l| format!(" {l} |")).collect::<String>();
                lines.push(format!("|{cells}"));
                lines.push(separator.clone());
            } else {
                let cells = labels.collect::<Vec<_>>().join(" ");
                lines.push(cells.trim_end().to_string());
            }
        }

        lines.join("\n")
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rep_pieces().join(", "))
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range(\"{self}\")")
    }
}

impl FromStr for Range {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_combos(parser::parse(s)?))
    }
}

impl TryFrom<&str> for Range {
    type Error = ParseRangeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromIterator<Combo> for Range {
    fn from_iter<I: IntoIterator<Item = Combo>>(iter: I) -> Self {
        Self::from_combos(iter)
    }
}

impl FromIterator<Hand> for Range {
    fn from_iter<I: IntoIterator<Item = Hand>>(iter: I) -> Self {
        Self::from_hands(iter)
    }
}

/// Ranges are ordered by their number of combos, two different ranges with
/// the same number of combos are not comparable.
impl PartialOrd for Range {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => (self == other).then_some(Ordering::Equal),
            ord => Some(ord),
        }
    }
}

impl Serialize for Range {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(s: &str) -> Range {
        s.parse().unwrap()
    }

    fn hands(s: &[&str]) -> Vec<Hand> {
        s.iter().map(|h| h.parse().unwrap()).collect()
    }

    fn combos(s: &[&str]) -> Vec<Combo> {
        s.iter().map(|c| c.parse().unwrap()).collect()
    }

    const DEUCES: [&str; 6] = ["2d2c", "2h2c", "2h2d", "2s2c", "2s2d", "2s2h"];
    const TREYS: [&str; 6] = ["3d3c", "3h3c", "3h3d", "3s3c", "3s3d", "3s3h"];

    #[test]
    fn range_pair_hands() {
        assert_eq!(range("22").hands(), hands(&["22"]));
        assert_eq!(range("22").combos(), combos(&DEUCES));
        assert_eq!(range("22 33").hands(), hands(&["22", "33"]));
        assert_eq!(range("33 22").hands(), hands(&["22", "33"]));
        assert_eq!(
            range("88+").hands(),
            hands(&["88", "99", "TT", "JJ", "QQ", "KK", "AA"])
        );
        assert_eq!(range("22+").hands().len(), 13);
        assert_eq!(range("22-55").hands(), hands(&["22", "33", "44", "55"]));
        assert_eq!(range("55-22").hands(), hands(&["22", "33", "44", "55"]));
        assert_eq!(range("33-22").hands(), range("22-33").hands());
        assert_eq!(range("44-").hands(), hands(&["22", "33", "44"]));
    }

    #[test]
    fn range_pair_combos() {
        let both = combos(&DEUCES)
            .into_iter()
            .chain(combos(&TREYS))
            .collect::<Vec<_>>();
        assert_eq!(range("22 33").combos(), both);
        assert_eq!(range("22-33").combos(), both);
        assert_eq!(range("55-33").combos(), range("33 44 55").combos());
    }

    #[test]
    fn range_unpaired_hands() {
        assert_eq!(range("AKo 84o").hands(), hands(&["84o", "AKo"]));
        assert_eq!(
            range("AK 48").hands(),
            hands(&["84s", "84o", "AKs", "AKo"])
        );
        assert_eq!(
            range("J8o-J4o").hands(),
            hands(&["J4o", "J5o", "J6o", "J7o", "J8o"])
        );
        assert_eq!(
            range("J8s-J4s").hands(),
            hands(&["J4s", "J5s", "J6s", "J7s", "J8s"])
        );
    }

    #[test]
    fn range_partial_hand() {
        let r = range("2s2c");
        assert!(r.hands().is_empty());
        assert_eq!(r.combos(), combos(&["2c2s"]));
        assert!(r.contains(&"2c2s".parse().unwrap()));
        assert!(!r.contains_hand(&"22".parse().unwrap()));
        assert!(range("22").contains_hand(&"22".parse().unwrap()));
    }

    #[test]
    fn range_empty() {
        for r in [Range::new(), range(""), range("  ")] {
            assert!(r.is_empty());
            assert!(r.hands().is_empty());
            assert!(r.combos().is_empty());
            assert_eq!(r.to_string(), "");
            assert_eq!(format!("{r:?}"), "Range(\"\")");
        }

        assert_eq!(Range::new(), range(""));
    }

    #[test]
    fn range_case_insensitive() {
        assert_eq!(range("aA"), range("AA"));
        assert_eq!(range("TT"), range("tt"));
        assert_eq!(range("AkO"), range("AKo"));
        assert_eq!(range("AKs"), range("kaS"));
        assert_eq!(range("asKC"), range("AsKc"));
    }

    #[test]
    fn range_percent() {
        assert_eq!(range("22").percent(), 0.45);
        assert_eq!(range("AKs").percent(), 0.3);
        assert_eq!(range("Ako").percent(), 0.9);
        assert_eq!(range("88+").percent(), 3.17);
        assert_eq!(range("22 AKo").percent(), 1.36);
        assert_eq!(range("XX").percent(), 100.0);
        assert_eq!(Range::new().percent(), 0.0);
    }

    #[test]
    fn range_len() {
        assert_eq!(range("22").len(), 6);
        assert_eq!(range("QQ").len(), 6);
        assert_eq!(range("22-55").len(), 24);
        assert_eq!(range("55-22").len(), 24);
        assert_eq!(range("AKs").len(), 4);
        assert_eq!(range("76s").len(), 4);
        assert_eq!(range("AKo").len(), 12);
        assert_eq!(range("XX").len(), 1_326);
    }

    #[test]
    fn range_from_hands_and_combos() {
        let r = Range::from_hands(hands(&["AA", "KK", "QQ"]));
        assert_eq!(r, range("QQ+"));

        let r = Range::from_combos(combos(&DEUCES));
        assert_eq!(r, range("22"));
        assert_eq!(r.combos(), combos(&DEUCES));
        assert_eq!(r.hands(), hands(&["22"]));

        let r = combos(&["AsKs", "KsAs", "AdKc"]).into_iter().collect::<Range>();
        assert_eq!(r.len(), 2);
        assert!(r.hands().is_empty());

        let r = hands(&["AKs", "AKo", "AKs"]).into_iter().collect::<Range>();
        assert_eq!(r, range("AK"));
    }

    #[test]
    fn range_equality() {
        assert_eq!(range("AKo 22+ 45 33"), range("22+ AKo 54"));
        assert_eq!(range("Ak"), range("Aks, AKo"));
        assert_eq!(range("33+"), range("44+, 33"));
        assert_ne!(range("AKs"), range("KJs"));
        assert_ne!(range("AKo"), range("KJo"));
        assert_ne!(range("22"), range("44"));
    }

    #[test]
    fn range_comparisons() {
        assert!(range("33+") < range("22+"));
        assert!(range("22+") > range("33+"));
        assert!(range("AKo, JKs") > range("AKo"));
        assert!(range("AKo") <= range("AKo"));

        // Same size but different combos.
        let (a, b) = (range("22"), range("33"));
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, b);
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn range_errors() {
        assert!(matches!(
            "HH".parse::<Range>(),
            Err(ParseRangeError::InvalidRank { .. })
        ));
        assert!(matches!(
            "KKo".parse::<Range>(),
            Err(ParseRangeError::QualifiedPair(_))
        ));
        assert!(matches!(
            "AsKq".parse::<Range>(),
            Err(ParseRangeError::InvalidSuit { .. })
        ));

        let err = "22+ AKo JK2".parse::<Range>().unwrap_err();
        assert_eq!(err.token(), "JK2");
        assert_eq!(err.to_string(), "invalid token 'JK2'");

        assert!(Range::try_from("AsAs").is_err());
    }

    #[test]
    fn range_to_string() {
        assert_eq!(range("22").to_string(), "22");
        assert_eq!(range("22 44").to_string(), "44, 22");
        assert_eq!(range("AKo").to_string(), "AKo");
        assert_eq!(range("AsKc").to_string(), "A♠K♣");
        assert_eq!(range("AK").to_string(), "AKs, AKo");
        assert_eq!(range("AKs").to_string(), "AKs");
        assert_eq!(range("22 AKo").to_string(), "22, AKo");
        assert_eq!(range("22 AKs").to_string(), "22, AKs");
        assert_eq!(range("22 AKo AKs").to_string(), "22, AKs, AKo");
        assert_eq!(range("22 AK").to_string(), "22, AKs, AKo");
        assert_eq!(range("22 AsKh").to_string(), "22, A♠K♥");
        assert_eq!(range("33-66").to_string(), "66-33");
        assert_eq!(range("55-22").to_string(), "55-");
        assert_eq!(range("XX").to_string(), "XX");
        assert_eq!(range("KX").to_string(), "K2s+, K2o+");
        assert_eq!(
            range("44+, KJs KJo JsQc AcKc").to_string(),
            "44+, A♣K♣, KJs, KJo, Q♣J♠"
        );
        assert_eq!(
            range("44-88, AA-KK, KJs KcJh JsQc AcKc 74s-76s").to_string(),
            "KK+, 88-44, A♣K♣, KJs, 74s+, K♣J♥, Q♣J♠"
        );
        assert_eq!(format!("{:?}", range("AK")), "Range(\"AKs, AKo\")");
    }

    #[test]
    fn range_rep_pieces() {
        assert_eq!(range("KX").rep_pieces(), ["K2s+", "K2o+"]);
        assert!(Range::new().rep_pieces().is_empty());
    }

    #[test]
    fn range_round_trip() {
        let texts = [
            "22+ AKo 54",
            "44-88, AA-KK, KJs KcJh JsQc AcKc 74s-76s",
            "T9s-T6s 2c2d 3h3s A5o- QX",
            "XX",
            "KQs J8o-J4o 9Xs 8Xo 7c7d 7c7h",
        ];
        for text in texts {
            let r = range(text);
            assert_eq!(range(&r.to_string()), r, "{text}");
        }

        // Every single combo and every hand with one combo removed.
        let all = range("XX");
        for combo in all.combos() {
            let r = Range::from_combos([*combo]);
            assert_eq!(range(&r.to_string()), r);

            let r = all.combos().iter().copied().filter(|c| c != combo).collect::<Range>();
            assert_eq!(r.len(), 1_325);
            assert_eq!(range(&r.to_string()), r);
        }

        // Every other hand.
        let r = Hand::all().step_by(2).collect::<Range>();
        assert_eq!(range(&r.to_string()), r);
        let r = Hand::all().skip(1).step_by(3).collect::<Range>();
        assert_eq!(range(&r.to_string()), r);
    }

    #[test]
    fn range_to_ascii() {
        let grid = range("AA AKs KQo 22").to_ascii(false);
        let lines = grid.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "AA  AKs");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "    KQo");
        assert_eq!(lines[12], format!("{}22", " ".repeat(4 * 12)));

        let grid = range("AA").to_ascii(true);
        let lines = grid.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 27);
        assert_eq!(lines[0], format!("|{}", "-----|".repeat(13)));
        assert!(lines[1].starts_with("| AA  |     |"));
    }

    #[test]
    fn range_serde() {
        let r = range("QQ+ AKs AsKc");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"QQ+, AKs, A♠K♣\"");
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), r);
        assert!(serde_json::from_str::<Range>("\"KKo\"").is_err());
    }
}
