// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Helpful utilities for working with post titles.

use htmlentity::entity::{self, ICodedDataTrait};

/// Turns a title as Reddit sends it into the title a person would read.
///
/// Reddit escapes "&", "<" and ">" in titles as "&amp;", "&lt;" and
/// "&gt;"; those entities are converted back into single characters so
/// that they neither show up in output nor get counted as words.
///
/// Leading and trailing whitespace will also be trimmed from the title.
///
/// # Examples
///
/// ```
/// use subtally::text::clean_title;
/// assert_eq!(clean_title("Rust &amp; WebAssembly"), "Rust & WebAssembly");
/// assert_eq!(clean_title("  Vec&lt;T&gt; vs. [T]  "), "Vec<T> vs. [T]");
/// assert_eq!(clean_title("A Plain Title"), "A Plain Title");
/// assert_eq!(clean_title("   "), "");
/// ```
pub fn clean_title(title: &str) -> String {
    let title = title.trim();
    entity::decode(title.as_bytes())
        .to_string()
        .unwrap_or_else(|_| title.to_string())
}
