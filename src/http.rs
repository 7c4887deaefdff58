// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Services for communicating with APIs using HTTP.

use crate::conf::Settings;
use reqwest::{Client, ClientBuilder, StatusCode, redirect};
use thiserror::Error;

/// A general service for making HTTP GET calls.
///
/// It might be a bit odd to refer to this trait as a "service", since
/// it appears to be more of a _client_ implementation, but think of
/// this as a proxy for a remote _service_. A service might not always
/// be remote, such as when the implementation is a deterministic service
/// used for testing.
pub trait HTTPGet {
    /// Sends a GET request to `uri` with the given query parameters and
    /// returns the raw body of a successful response.
    fn get(&self, uri: &str, query: &[(&str, String)])
    -> impl Future<Output = HTTPResult<String>> + Send;
}

/// Builds HTTP clients suitable for talking to Reddit.
#[derive(Debug)]
pub struct HTTPClientFactory<'a> {
    settings: &'a Settings,
}

impl<'a> HTTPClientFactory<'a> {
    /// Creates a factory that configures clients from `settings`.
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Creates a new HTTP client.
    ///
    /// Redirects are never followed: Reddit answers requests for
    /// subreddits that do not exist with a redirect to its search page,
    /// and following it would turn a missing subreddit into a successful
    /// response.
    pub fn create(&self) -> HTTPResult<Client> {
        ClientBuilder::new()
            .user_agent(self.settings.user_agent())
            .timeout(self.settings.timeout())
            .redirect(redirect::Policy::none())
            .build()
            .map_err(HTTPError::Client)
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// The HTTP client itself could not be set up.
    #[error("Error creating HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// An error that occurred while making an HTTP request, including
    /// timeouts.
    #[error("Error while making HTTP request: {0}")]
    Request(#[source] reqwest::Error),

    /// An error retrieving the body of a response.
    #[error("Error retrieving body of HTTP response: {0}")]
    Body(#[source] reqwest::Error),

    /// Any HTTP status other than 200, redirects included.
    #[error("Request returned HTTP {0}")]
    Http(StatusCode),
}

impl HTTPError {
    /// True if the request failed because the server took too long.
    pub fn is_timeout(&self) -> bool {
        match self {
            HTTPError::Request(err) | HTTPError::Body(err) => err.is_timeout(),
            _ => false,
        }
    }
}
