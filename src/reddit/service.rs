// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit's subreddit endpoints.

use crate::conf::Settings;
use crate::http::{HTTPClientFactory, HTTPError, HTTPGet, HTTPResult};
use log::debug;
use reqwest::{Client, StatusCode};
use std::fmt;

/// The subreddit endpoints subtally knows how to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Subreddit metadata (`/r/<subreddit>/about.json`).
    About,

    /// The subreddit's hot listing (`/r/<subreddit>/hot/.json`).
    Hot,
}

impl Resource {
    fn path(&self) -> &'static str {
        match self {
            Resource::About => "about.json",
            Resource::Hot => "hot/.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::About => write!(f, "about"),
            Resource::Hot => write!(f, "hot"),
        }
    }
}

/// Where to start reading a listing and how much of it to read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    /// Cursor returned by the previous page; empty for the first page,
    /// which is requested with only a `limit`.
    pub after: String,

    /// Number of posts already seen.
    pub count: u64,

    /// Maximum number of posts to return, between 1 and 100.
    pub limit: u32,
}

impl Page {
    /// The first page of a listing, returning at most `limit` posts.
    pub fn first(limit: u32) -> Self {
        Self {
            after: String::new(),
            count: 0,
            limit,
        }
    }

    /// The page following this one, given the cursor and size of this one.
    pub fn next(&self, after: impl Into<String>, dist: u64) -> Self {
        Self {
            after: after.into(),
            count: self.count + dist,
            limit: self.limit,
        }
    }
}

/// A service for retrieving information about subreddits.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Performs a GET request to the `resource` associated with the given
    /// `subreddit` and returns the raw body of the response.
    ///
    /// `page` is only meaningful for [`Resource::Hot`].
    fn get_resource(
        &self,
        subreddit: &str,
        resource: Resource,
        page: Option<&Page>,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Reddit API directly to retrieve information.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
    base_url: String,
}

impl RedditService {
    /// Creates a new Reddit service configured by `settings`.
    pub fn new(settings: &Settings) -> HTTPResult<Self> {
        let client = HTTPClientFactory::new(settings).create()?;
        let base_url = settings.base_url().to_string();
        Ok(Self { client, base_url })
    }

    /// Creates a new Reddit service configured from the environment.
    pub fn from_env() -> HTTPResult<Self> {
        Self::new(&Settings::from_env())
    }

    fn query(&self, resource: Resource, page: Option<&Page>) -> Vec<(&'static str, String)> {
        match (resource, page) {
            (Resource::Hot, Some(page)) if page.after.is_empty() => {
                vec![("limit", page.limit.to_string())]
            }
            (Resource::Hot, Some(page)) => vec![
                ("after", page.after.clone()),
                ("count", page.count.to_string()),
                ("limit", page.limit.to_string()),
            ],
            _ => vec![],
        }
    }

    fn uri(&self, subreddit: &str, resource: Resource) -> String {
        format!("{}/r/{subreddit}/{}", self.base_url, resource.path())
    }
}

impl HTTPGet for RedditService {
    /// Sends a GET request to a Reddit API endpoint and returns the raw body.
    ///
    /// Anything but a 200 is an error, including redirects, which Reddit
    /// uses to signal that a subreddit does not exist.
    async fn get(&self, uri: &str, query: &[(&str, String)]) -> HTTPResult<String> {
        debug!("GET {uri} {query:?}");
        let resp = self
            .client
            .get(uri)
            .query(query)
            .send()
            .await
            .map_err(HTTPError::Request)
            .inspect_err(|err| {
                if err.is_timeout() {
                    debug!("GET {uri} timed out");
                }
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            Err(HTTPError::Http(status))
        } else {
            resp.text().await.map_err(HTTPError::Body)
        }
    }
}

impl Service for RedditService {
    async fn get_resource(
        &self,
        subreddit: &str,
        resource: Resource,
        page: Option<&Page>,
    ) -> HTTPResult<String> {
        let uri = self.uri(subreddit, resource);
        let query = self.query(resource, page);
        self.get(&uri, &query).await
    }
}
