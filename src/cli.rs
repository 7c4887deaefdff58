// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.

pub use crate::reddit::client::Error;
use crate::count::MatchPolicy;
use crate::reddit::Subreddit;
use crate::reddit::service::{RedditService, Service};
use crate::view::Viewable;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::LevelFilter;

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Counts keywords in the titles of a subreddit's hot posts", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Command,
}

impl Config {
    /// Most detailed log level the user asked for.
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter()
    }

    /// Name of the subreddit the command operates on.
    pub fn subreddit(&self) -> &str {
        self.command.subreddit()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the number of subscribers to a subreddit
    #[command(alias = "subs")]
    Subscribers {
        /// Subreddit name, without the leading "r/"
        subreddit: String,
    },

    /// Show the titles of a subreddit's hottest posts
    Top {
        /// Subreddit name, without the leading "r/"
        subreddit: String,

        /// Number of posts to show
        #[arg(short = 'n', long, default_value_t = 10,
              value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },

    /// Show the titles of every post in a subreddit's hot listing
    Titles {
        /// Subreddit name, without the leading "r/"
        subreddit: String,
    },

    /// Count keywords in the titles of every post in a subreddit's hot listing
    #[command(alias = "c")]
    Count {
        /// Subreddit name, without the leading "r/"
        subreddit: String,

        /// Keywords to count; a quoted, space-separated list also works
        #[arg(required = true)]
        keywords: Vec<String>,

        /// Only match whole space-separated words, so "cats!" does not match "cats"
        #[arg(long, default_value_t = false)]
        exact: bool,
    },
}

impl Command {
    fn subreddit(&self) -> &str {
        match &self {
            Command::Subscribers { subreddit } => subreddit,
            Command::Top { subreddit, .. } => subreddit,
            Command::Titles { subreddit } => subreddit,
            Command::Count { subreddit, .. } => subreddit,
        }
    }
}

/// Splits every keyword argument on whitespace, so that
/// `count rust "go python"` counts three keywords.
fn split_keywords(keywords: &[String]) -> Vec<&str> {
    keywords
        .iter()
        .flat_map(|keyword| keyword.split_whitespace())
        .collect()
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner<S: Service = RedditService> {
    config: Config,
    subreddit: Subreddit<S>,
}

impl Runner<RedditService> {
    /// Create a new program runner using the given `config`.
    ///
    /// Returns an error if an HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self, Error> {
        let subreddit = Subreddit::new(config.subreddit())?;
        Ok(Self { config, subreddit })
    }
}

impl<S: Service> Runner<S> {
    /// Run the command-line program using its stored configuration options.
    pub async fn run(&self) {
        if let Some(output) = self.output().await {
            println!("{output}");
        }
    }

    /// Everything the command would print, or `None` if it prints nothing.
    async fn output(&self) -> Option<String> {
        let output = match &self.config.command {
            Command::Subscribers { .. } => self.subreddit.subscribers().await.to_string(),
            Command::Top { limit, .. } => {
                let titles = self.subreddit.hot_page(*limit).await;
                titles.as_deref().view()
            }
            Command::Titles { .. } => {
                let titles = self.subreddit.hot_titles().await;
                titles.as_deref().view()
            }
            Command::Count {
                keywords, exact, ..
            } => {
                let policy = if *exact {
                    MatchPolicy::Exact
                } else {
                    MatchPolicy::Scan
                };
                let counts = self
                    .subreddit
                    .count_words(split_keywords(keywords), policy)
                    .await;
                counts.unwrap_or_default().view()
            }
        };
        Some(output).filter(|output| !output.is_empty())
    }
}
