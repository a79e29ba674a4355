// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rendering of human-readable document numbers from format templates.
//!
//! A template may contain one year placeholder (`{YYYY}` or `{YY}`) and one
//! sequence placeholder (`{####}`, `{###}` or `{##}`). Only the first
//! occurrence of the first matching token of each family is replaced; tokens
//! are checked in the order they are listed here.

use time::Date;

/// Year placeholders in match order.
const YEAR_TOKENS: [&str; 2] = ["{YYYY}", "{YY}"];

/// Sequence placeholders in match order, with their zero-padded width.
const SEQUENCE_TOKENS: [(&str, u32); 3] = [("{####}", 4), ("{###}", 3), ("{##}", 2)];

/// Renders a document number.
///
/// The sequence is reduced modulo `10^width` of its placeholder before
/// padding, so `{##}` with sequence `10005` renders as `05`. When the format
/// has no sequence placeholder, `-{sequence}` is appended unpadded.
///
/// # Arguments
///
/// * `format` - The template, e.g. `WO-{YYYY}-{####}`
/// * `sequence` - The sequence value to embed
/// * `today` - The date supplying the year placeholders
#[must_use]
pub fn render_number(format: &str, sequence: u64, today: Date) -> String {
    let rendered: String = render_year(format, today.year());

    match SEQUENCE_TOKENS
        .iter()
        .find(|(token, _)| rendered.contains(token))
    {
        Some((token, width)) => {
            let wrapped: u64 = sequence % 10_u64.pow(*width);
            let padded: String = format!("{wrapped:0width$}", width = *width as usize);
            rendered.replacen(token, &padded, 1)
        }
        None => format!("{rendered}-{sequence}"),
    }
}

fn render_year(format: &str, year: i32) -> String {
    match YEAR_TOKENS.iter().find(|token| format.contains(*token)) {
        Some(&"{YYYY}") => format.replacen("{YYYY}", &format!("{year:04}"), 1),
        Some(token) => format.replacen(token, &format!("{:02}", year.rem_euclid(100)), 1),
        None => format.to_string(),
    }
}
