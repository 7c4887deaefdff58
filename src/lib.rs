// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! subtally is a command-line tool for poking at a subreddit's hot listing.
//! It can report how many users subscribe to a subreddit, list the titles of
//! its hottest posts, and count how often a set of keywords appears in the
//! titles of every post in the listing.
//!
//! # Examples
//!
//! (In all examples, replace `programming` with the name of an actual
//! subreddit.)
//!
//! Show the number of subscribers to a subreddit:
//!
//! ```bash
//! subtally subscribers programming
//! ```
//!
//! Show the titles of the ten hottest posts in a subreddit (or `None` if
//! the subreddit does not exist):
//!
//! ```bash
//! subtally top programming
//! ```
//!
//! Show the titles of every post in a subreddit's hot listing:
//!
//! ```bash
//! subtally titles programming
//! ```
//!
//! Count keywords in the titles of every hot post, most frequent first:
//!
//! ```bash
//! subtally count programming react python java javascript scala
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! subtally --help
//! ```
//!
//! # Matching keywords
//!
//! By default, a title's words are its runs of letters, so `cats!` and
//! `(cats)` both count as `cats`, and `python3` counts as `python`. Pass
//! `--exact` to `subtally count` to split titles on whitespace only, in which
//! case `cats!` is its own word. Keywords are always case-insensitive, and a
//! keyword given twice counts twice for every match.
//!
//! # Configuration
//!
//! Reddit requires every client to identify itself, and subtally sends
//! `subtally v<version>` by default. See the [`conf`] module for the
//! environment variables that change this and other settings.
//!
//! # License
//!
//! subtally is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod conf;
pub mod count;
pub mod http;
pub mod reddit;
pub mod text;
pub mod view;

#[cfg(test)]
mod test_utils;
