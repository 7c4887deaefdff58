// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, subreddits,
//! etc. This module provides an easy way to work with the JSON data the
//! Reddit API returns for subreddits and their hot listings.
//!
//! Reddit is not particularly consistent about which fields it includes,
//! so every field is optional and a missing field is never a parse error.
//! Callers decide what an absent field means.

use crate::text::clean_title;
use serde::Deserialize;
use thiserror::Error;

/// A subreddit's "about" data, as returned by `/r/<subreddit>/about.json`.
#[derive(Debug, Default, Deserialize)]
pub struct About {
    #[serde(default)]
    data: Option<AboutData>,
}

#[derive(Debug, Default, Deserialize)]
struct AboutData {
    #[serde(default)]
    subscribers: Option<u64>,
}

impl About {
    /// Parses a text response from the Reddit API into subreddit data.
    pub fn parse(about_data: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(about_data)?)
    }

    /// Number of subscribers, if Reddit reported it.
    pub fn subscribers(&self) -> Option<u64> {
        self.data.as_ref().and_then(|data| data.subscribers)
    }
}

/// One page of a subreddit's hot listing, as returned by
/// `/r/<subreddit>/hot/.json`.
#[derive(Debug, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    data: Option<ListingData>,
}

/// The body of a [`Listing`].
#[derive(Debug, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    after: Option<String>,

    #[serde(default)]
    dist: Option<u64>,

    #[serde(default)]
    children: Option<Vec<Child>>,
}

#[derive(Debug, Default, Deserialize)]
struct Child {
    #[serde(default)]
    data: Option<Post>,
}

#[derive(Debug, Default, Deserialize)]
struct Post {
    #[serde(default)]
    title: Option<String>,
}

impl Listing {
    /// Parses a text response from the Reddit API into a page of posts.
    pub fn parse(listing_data: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(listing_data)?)
    }

    /// The body of the listing.
    ///
    /// Returns [`Error::MissingData`] if Reddit sent back something
    /// without a `data` object.
    pub fn data(&self) -> Result<&ListingData, Error> {
        self.data.as_ref().ok_or(Error::MissingData)
    }
}

impl ListingData {
    /// Cursor for the next page, or `None` if this is the last page.
    ///
    /// Reddit sometimes sends an empty cursor instead of `null` on the
    /// last page.
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref().filter(|after| !after.is_empty())
    }

    /// Number of posts on this page.
    pub fn dist(&self) -> u64 {
        self.dist.unwrap_or(0)
    }

    /// True if the page had a `children` array with at least one entry.
    pub fn has_children(&self) -> bool {
        self.children
            .as_ref()
            .is_some_and(|children| !children.is_empty())
    }

    /// Titles of the posts on this page, in listing order.
    ///
    /// HTML entities are decoded. Posts without a title, or with a blank
    /// one, are skipped.
    pub fn titles(&self) -> impl Iterator<Item = String> + '_ {
        self.children
            .iter()
            .flatten()
            .filter_map(|child| child.data.as_ref())
            .filter_map(|post| post.title.as_deref())
            .map(clean_title)
            .filter(|title| !title.is_empty())
    }
}

/// An error parsing Reddit data.
#[derive(Debug, Error)]
pub enum Error {
    /// The response was not JSON, or not JSON shaped like a Reddit thing.
    #[error("could not parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response did not contain a `data` object.
    #[error("response has no data")]
    MissingData,
}
