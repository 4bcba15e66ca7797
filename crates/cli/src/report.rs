// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Range report formatting.
use std::fmt::{self, Write};

use handrange_core::Range;

/// What to print for a range.
#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    /// Print the complete hands.
    pub hands: bool,
    /// Print all the combos.
    pub combos: bool,
    /// Print the hands grid.
    pub grid: bool,
    /// Draw the grid borders.
    pub border: bool,
}

/// Formats a range report.
pub fn render(range: &Range, options: &Options) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, range, options)?;
    Ok(out)
}

fn write_report(out: &mut impl Write, range: &Range, options: &Options) -> fmt::Result {
    writeln!(out, "Range:   {range}")?;
    writeln!(out, "Size:    {}", range.len())?;
    writeln!(out, "Percent: {:.2}%", range.percent())?;

    if options.hands {
        let hands = range
            .hands()
            .iter()
            .rev()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();
        writeln!(out, "Hands:   {}", hands.join(" "))?;
    }

    if options.combos {
        let combos = range
            .combos()
            .iter()
            .rev()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        writeln!(out, "Combos:  {}", combos.join(" "))?;
    }

    if options.grid {
        writeln!(out, "{}", range.to_ascii(options.border))?;
    }

    Ok(())
}
