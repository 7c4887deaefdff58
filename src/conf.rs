// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Environment and configuration utilities.
//!
//! subtally has very little to configure, but a few knobs are useful when
//! talking to Reddit through a proxy or when Reddit is being slow. All of
//! them are read from the environment:
//!
//! | Variable              | Default                  |
//! |-----------------------|--------------------------|
//! | `SUBTALLY_USER_AGENT` | `subtally v<version>`    |
//! | `SUBTALLY_TIMEOUT`    | `10` (seconds)           |
//! | `SUBTALLY_BASE_URL`   | `https://www.reddit.com` |

use std::env;
use std::time::Duration;

/// Name of the environment variable used to override the user agent.
pub const USER_AGENT_VAR: &str = "SUBTALLY_USER_AGENT";

/// Name of the environment variable used to override the request timeout.
pub const TIMEOUT_VAR: &str = "SUBTALLY_TIMEOUT";

/// Name of the environment variable used to override the API host.
pub const BASE_URL_VAR: &str = "SUBTALLY_BASE_URL";

/// Host that serves the Reddit JSON API.
pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Number of seconds to wait for a single response.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings used when talking to the Reddit API.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    user_agent: String,
    timeout: Duration,
    base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}

impl Settings {
    /// Reads settings from the environment, falling back to defaults for
    /// anything that is unset or unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use subtally::conf::Settings;
    /// # use temp_env::with_var;
    /// # with_var("SUBTALLY_TIMEOUT", Some("3"), || {
    /// let settings = Settings::from_env();
    /// assert_eq!(settings.timeout().as_secs(), 3);
    /// # });
    /// ```
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let user_agent = env::var(USER_AGENT_VAR)
            .ok()
            .map(|ua| ua.trim().to_string())
            .filter(|ua| !ua.is_empty())
            .unwrap_or(defaults.user_agent);

        let timeout = env::var(TIMEOUT_VAR)
            .ok()
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let base_url = env::var(BASE_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.base_url);

        Self::default()
            .with_user_agent(user_agent)
            .with_timeout(timeout)
            .with_base_url(base_url)
    }

    /// Sets the user agent. A blank user agent is ignored, because Reddit
    /// rejects clients that do not identify themselves.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if !user_agent.trim().is_empty() {
            self.user_agent = user_agent;
        }
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the scheme and host that requests are sent to.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// How long to wait for any single response.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Scheme and host of the Reddit API, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// An appropriate user agent to use when making HTTP requests.
pub fn default_user_agent() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
