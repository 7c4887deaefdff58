// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Draws viewable objects into a terminal window.

use crate::count::KeywordCount;
use itertools::Itertools;

/// Printed in place of titles when a subreddit cannot be read.
pub const NO_RESULT: &str = "None";

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    ///
    /// The string has no trailing newline and may be empty, in which case
    /// nothing should be printed at all.
    fn view(&self) -> String;
}

impl Viewable for KeywordCount {
    fn view(&self) -> String {
        let (keyword, count) = self;
        format!("{keyword}: {count}")
    }
}

impl Viewable for [KeywordCount] {
    fn view(&self) -> String {
        self.iter().map(Viewable::view).join("\n")
    }
}

impl Viewable for [String] {
    fn view(&self) -> String {
        self.join("\n")
    }
}

impl<T: Viewable + ?Sized> Viewable for Option<&T> {
    /// Views the item, or [`NO_RESULT`] if there is no item.
    fn view(&self) -> String {
        match self {
            Some(item) => item.view(),
            None => String::from(NO_RESULT),
        }
    }
}
