// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Counting keywords in post titles.

use counter::Counter;
use regex::Regex;
use std::sync::LazyLock;
use std::vec::IntoIter;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Alphabetic}+").expect("invalid word regex"));

/// Decides which parts of a title count as words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Words are runs of alphabetic characters, so punctuation never gets
    /// in the way: "cats!" and "(cats)" both contain the word "cats".
    #[default]
    Scan,

    /// Words are whatever is separated by whitespace, so "cats!" is the
    /// word "cats!" and does not match "cats".
    Exact,
}

impl MatchPolicy {
    /// Splits an already-lowercased title into words.
    fn words<'a>(&self, title: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self {
            MatchPolicy::Scan => Box::new(WORD_RE.find_iter(title).map(|m| m.as_str())),
            MatchPolicy::Exact => Box::new(title.split_whitespace()),
        }
    }
}

/// A pair of keyword and the number of times it was seen.
pub type KeywordCount = (String, usize);

/// Counts how often a set of keywords appears in a stream of titles.
///
/// Keywords are case-insensitive. A keyword that the caller listed more
/// than once counts that many times for each match, so tallying
/// `["cat", "cat"]` against "my cat" counts "cat" twice.
///
/// # Examples
///
/// ```
/// use subtally::count::{KeywordTally, MatchPolicy};
///
/// let mut tally = KeywordTally::new(["go"], MatchPolicy::Scan);
/// tally.add_title("Learning Go is fun");
/// tally.add_title("GO vs go");
/// let counts: Vec<_> = tally.finish().collect();
/// assert_eq!(counts, vec![(String::from("go"), 3)]);
/// ```
#[derive(Debug)]
pub struct KeywordTally {
    policy: MatchPolicy,
    frequencies: Counter<String>,
    tallies: Counter<String>,
}

impl KeywordTally {
    /// Prepares to count `keywords` using the given matching `policy`.
    ///
    /// Blank keywords are ignored.
    pub fn new<S: AsRef<str>>(keywords: impl IntoIterator<Item = S>, policy: MatchPolicy) -> Self {
        let frequencies = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect::<Counter<_>>();
        let mut tallies = Counter::new();
        for keyword in frequencies.keys() {
            tallies.insert(keyword.clone(), 0);
        }
        Self {
            policy,
            frequencies,
            tallies,
        }
    }

    /// True if there is nothing to look for.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Counts the keywords in a single title.
    pub fn add_title(&mut self, title: &str) {
        let title = title.to_lowercase();
        for word in self.policy.words(&title) {
            if let Some(weight) = self.frequencies.get(word) {
                if let Some(total) = self.tallies.get_mut(word) {
                    *total += weight;
                }
            }
        }
    }

    /// The running count for `keyword`, or `None` if it is not being counted.
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.tallies.get(&keyword.to_lowercase()).copied()
    }

    /// Returns every keyword that was seen at least once, most frequent
    /// first, with ties broken alphabetically.
    pub fn finish(self) -> IntoIter<KeywordCount> {
        self.tallies
            .most_common_tiebreaker(|lhs, rhs| Ord::cmp(lhs, rhs))
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect::<Vec<_>>()
            .into_iter()
    }
}
