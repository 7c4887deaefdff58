// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading data from the Reddit API.
//!
//! Every public operation on [`Subreddit`] swallows errors and answers
//! with a sentinel instead: `0` subscribers, or `None` titles or counts.
//! Reddit does not distinguish a subreddit that does not exist from one
//! that is private or banned in any way a client can rely on, so neither
//! does subtally. Errors are still logged.

use crate::count::{KeywordCount, KeywordTally, MatchPolicy};
use crate::http;
use crate::reddit::service::{Page, RedditService, Resource, Service};
use crate::reddit::thing::{self, About, Listing};
use log::{debug, warn};
use thiserror::Error;

/// Represents a subreddit.
#[derive(Debug)]
pub struct Subreddit<S: Service = RedditService> {
    name: String,
    service: S,
}

impl Subreddit<RedditService> {
    /// Creates a new client for retrieving information about a subreddit,
    /// configured from the environment.
    ///
    /// `name` is the subreddit's name, without the leading `r/`. It is not
    /// validated; Reddit decides whether it exists.
    ///
    /// Returns an [`enum@Error`] if an HTTP client cannot be created.
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let service = RedditService::from_env()?;
        Ok(Self::with_service(name, service))
    }
}

impl<S: Service> Subreddit<S> {
    /// Number of posts requested per page when walking a whole listing.
    /// This is the most Reddit will return at once.
    pub const PAGE_LIMIT: u32 = 100;

    /// Number of posts returned by [`Subreddit::top_ten()`].
    pub const TOP_LIMIT: u32 = 10;

    /// Creates a new client for retrieving information about a subreddit.
    ///
    /// `name` is the subreddit's name. `service` is the actual service
    /// implementation that will be used to retrieve information about the
    /// subreddit.
    pub fn with_service(name: impl Into<String>, service: S) -> Self {
        let name = name.into();
        Self { name, service }
    }

    /// Number of users subscribed to the subreddit.
    ///
    /// Returns 0 if the subreddit does not exist or Reddit did not report
    /// a subscriber count.
    pub async fn subscribers(&self) -> u64 {
        self.fetch_about()
            .await
            .inspect_err(|err| warn!("could not get subscribers for r/{}: {err}", self.name))
            .ok()
            .and_then(|about| about.subscribers())
            .unwrap_or(0)
    }

    /// Titles of the ten hottest posts in the subreddit.
    ///
    /// Returns `None` if the subreddit does not exist or has no posts.
    pub async fn top_ten(&self) -> Option<Vec<String>> {
        self.hot_page(Self::TOP_LIMIT).await
    }

    /// Titles of the `limit` hottest posts in the subreddit, where `limit`
    /// is clamped to the range Reddit accepts (1 to 100).
    ///
    /// Only the first page of the listing is read. Returns `None` if the
    /// subreddit does not exist or has no posts.
    pub async fn hot_page(&self, limit: u32) -> Option<Vec<String>> {
        let page = Page::first(limit.clamp(1, Self::PAGE_LIMIT));
        let listing = self
            .fetch_page(&page)
            .await
            .inspect_err(|err| warn!("could not get hot posts for r/{}: {err}", self.name))
            .ok()?;
        let data = listing.data().ok()?;
        if data.has_children() {
            Some(data.titles().collect())
        } else {
            debug!("r/{} has no hot posts", self.name);
            None
        }
    }

    /// Titles of every post in the subreddit's hot listing, in order.
    ///
    /// Returns `None` if any page of the listing cannot be read.
    pub async fn hot_titles(&self) -> Option<Vec<String>> {
        let mut titles = vec![];
        self.walk(|title| titles.push(title))
            .await
            .inspect_err(|err| warn!("could not list hot posts for r/{}: {err}", self.name))
            .ok()?;
        Some(titles)
    }

    /// Counts how often each of `keywords` appears in the titles of every
    /// post in the subreddit's hot listing.
    ///
    /// Keywords are case-insensitive, and a keyword listed more than once
    /// counts that many times per match. Only keywords that were seen are
    /// returned, most frequent first, with ties broken alphabetically.
    /// Returns `None` if any page of the listing cannot be read.
    pub async fn count_words<T: AsRef<str>>(
        &self,
        keywords: impl IntoIterator<Item = T>,
        policy: MatchPolicy,
    ) -> Option<Vec<KeywordCount>> {
        let mut tally = KeywordTally::new(keywords, policy);
        if tally.is_empty() {
            debug!("no keywords to count in r/{}", self.name);
            return Some(vec![]);
        }
        self.walk(|title| tally.add_title(&title))
            .await
            .inspect_err(|err| warn!("could not count words in r/{}: {err}", self.name))
            .ok()?;
        Some(tally.finish().collect())
    }

    async fn fetch_about(&self) -> Result<About, Error> {
        let body = self
            .service
            .get_resource(&self.name, Resource::About, None)
            .await?;
        Ok(About::parse(&body)?)
    }

    async fn fetch_page(&self, page: &Page) -> Result<Listing, Error> {
        let body = self
            .service
            .get_resource(&self.name, Resource::Hot, Some(page))
            .await?;
        Ok(Listing::parse(&body)?)
    }

    /// Reads the hot listing page by page, passing every title to
    /// `consume`, until Reddit stops returning a cursor.
    ///
    /// Any page that cannot be read aborts the walk.
    async fn walk(&self, mut consume: impl FnMut(String)) -> Result<(), Error> {
        let mut page = Page::first(Self::PAGE_LIMIT);
        loop {
            let listing = self.fetch_page(&page).await?;
            let data = listing.data()?;
            data.titles().for_each(&mut consume);

            match data.after() {
                Some(after) => {
                    page = page.next(after, data.dist());
                    debug!("r/{}: next page after {} ({} posts)", self.name, page.after, page.count);
                }
                None => {
                    let seen = page.count + data.dist();
                    debug!("r/{}: end of listing ({seen} posts)", self.name);
                    return Ok(());
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn service(&self) -> &S {
        &self.service
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),
}

#[cfg(test)]
mod tests {
    use crate::count::MatchPolicy;
    use crate::reddit::Subreddit;
    use crate::reddit::service::{Page, Resource};

    fn pairs(expected: &[(&str, usize)]) -> Vec<(String, usize)> {
        expected
            .iter()
            .map(|(keyword, count)| ((*keyword).to_string(), *count))
            .collect()
    }

    mod subscribers {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn it_returns_the_number_of_subscribers() {
            let subscribers = Subreddit::test("rust").subscribers().await;
            assert_eq!(subscribers, 345678);
        }

        #[tokio::test]
        async fn it_returns_the_same_number_every_time() {
            let subreddit = Subreddit::test("rust");
            let first = subreddit.subscribers().await;
            let second = subreddit.subscribers().await;
            assert_eq!(first, second);
        }

        #[tokio::test]
        async fn it_returns_zero_for_an_invalid_subreddit() {
            let subscribers = Subreddit::test("doesnotexist").subscribers().await;
            assert_eq!(subscribers, 0);
        }

        #[tokio::test]
        async fn it_returns_zero_without_a_subscriber_count() {
            let subscribers = Subreddit::test("nosubs").subscribers().await;
            assert_eq!(subscribers, 0);
        }

        #[tokio::test]
        async fn it_returns_zero_without_data() {
            let subscribers = Subreddit::test("nodata").subscribers().await;
            assert_eq!(subscribers, 0);
        }

        #[tokio::test]
        async fn it_returns_zero_for_a_response_that_is_not_json() {
            let subscribers = Subreddit::test("garbage").subscribers().await;
            assert_eq!(subscribers, 0);
        }

        #[tokio::test]
        async fn it_requests_about_data() {
            let subreddit = Subreddit::test("rust");
            subreddit.subscribers().await;
            assert_eq!(subreddit.service().requests(), vec![(Resource::About, None)]);
        }
    }

    mod top_ten {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn it_returns_titles_from_the_first_page() {
            let titles = Subreddit::test("rust").top_ten().await;
            let expected = vec![
                "Announcing Rust 1.88.0",
                "Why I moved from Go to Rust",
                "Rust & Python interop with PyO3",
            ];
            assert_eq!(titles, Some(expected.into_iter().map(String::from).collect::<Vec<_>>()));
        }

        #[tokio::test]
        async fn it_requests_a_single_page_of_ten() {
            let subreddit = Subreddit::test("rust");
            subreddit.top_ten().await;
            assert_eq!(
                subreddit.service().requests(),
                vec![(Resource::Hot, Some(Page::first(10)))]
            );
        }

        #[tokio::test]
        async fn it_clamps_the_page_size() {
            let subreddit = Subreddit::test("rust");
            subreddit.hot_page(500).await;
            subreddit.hot_page(0).await;
            assert_eq!(
                subreddit.service().requests(),
                vec![
                    (Resource::Hot, Some(Page::first(100))),
                    (Resource::Hot, Some(Page::first(1))),
                ]
            );
        }

        #[tokio::test]
        async fn it_returns_none_for_an_invalid_subreddit() {
            let titles = Subreddit::test("doesnotexist").top_ten().await;
            assert_eq!(titles, None);
        }

        #[tokio::test]
        async fn it_returns_none_for_an_empty_listing() {
            let titles = Subreddit::test("empty").top_ten().await;
            assert_eq!(titles, None);
        }

        #[tokio::test]
        async fn it_returns_none_without_data() {
            let titles = Subreddit::test("nodata").top_ten().await;
            assert_eq!(titles, None);
        }
    }

    mod hot_titles {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn it_returns_titles_from_every_page_in_order() {
            let titles = Subreddit::test("rust").hot_titles().await;
            let expected = vec![
                "Announcing Rust 1.88.0",
                "Why I moved from Go to Rust",
                "Rust & Python interop with PyO3",
                "Is Rust worth learning in 2025?",
                "A Go programmer's first week with rust",
                "Python vs. Rust vs. Go: benchmarks",
            ];
            assert_eq!(titles, Some(expected.into_iter().map(String::from).collect::<Vec<_>>()));
        }

        #[tokio::test]
        async fn it_follows_cursors_until_the_listing_ends() {
            let subreddit = Subreddit::test("rust");
            subreddit.hot_titles().await;
            let first = Page::first(100);
            let second = first.next("t3_page2", 3);
            let third = second.next("t3_page3", 2);
            assert_eq!(
                subreddit.service().requests(),
                vec![
                    (Resource::Hot, Some(first)),
                    (Resource::Hot, Some(second)),
                    (Resource::Hot, Some(third)),
                ]
            );
        }

        #[tokio::test]
        async fn it_returns_an_empty_list_for_an_empty_listing() {
            let titles = Subreddit::test("empty").hot_titles().await;
            assert_eq!(titles, Some(vec![]));
        }

        #[tokio::test]
        async fn it_returns_none_for_an_invalid_subreddit() {
            let titles = Subreddit::test("doesnotexist").hot_titles().await;
            assert_eq!(titles, None);
        }

        #[tokio::test]
        async fn it_returns_none_if_a_later_page_fails() {
            let titles = Subreddit::test("broken").hot_titles().await;
            assert_eq!(titles, None);
        }

        #[tokio::test]
        async fn it_returns_none_without_data() {
            let titles = Subreddit::test("nodata").hot_titles().await;
            assert_eq!(titles, None);
        }
    }

    mod count_words {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn it_counts_keywords_across_every_page() {
            let counts = Subreddit::test("rust")
                .count_words(["rust", "go", "python", "java"], MatchPolicy::Scan)
                .await;
            assert_eq!(counts, Some(pairs(&[("rust", 6), ("go", 3), ("python", 2)])));
        }

        #[tokio::test]
        async fn it_counts_keywords_exactly() {
            let counts = Subreddit::test("rust")
                .count_words(["rust", "go", "python", "java"], MatchPolicy::Exact)
                .await;
            assert_eq!(counts, Some(pairs(&[("rust", 6), ("go", 2), ("python", 2)])));
        }

        #[tokio::test]
        async fn it_counts_a_single_page() {
            let counts = Subreddit::test("single")
                .count_words(["go"], MatchPolicy::Scan)
                .await;
            assert_eq!(counts, Some(pairs(&[("go", 3)])));
        }

        #[tokio::test]
        async fn it_counts_duplicate_keywords_more_than_once() {
            let counts = Subreddit::test("single")
                .count_words(["GO", "go"], MatchPolicy::Scan)
                .await;
            assert_eq!(counts, Some(pairs(&[("go", 6)])));
        }

        #[tokio::test]
        async fn it_returns_nothing_without_matches() {
            let counts = Subreddit::test("rust")
                .count_words(["haskell", "ocaml"], MatchPolicy::Scan)
                .await;
            assert_eq!(counts, Some(vec![]));
        }

        #[tokio::test]
        async fn it_does_not_fetch_anything_without_keywords() {
            let subreddit = Subreddit::test("rust");
            let counts = subreddit.count_words(Vec::<String>::new(), MatchPolicy::Scan).await;
            assert_eq!(counts, Some(vec![]));
            assert!(subreddit.service().requests().is_empty());
        }

        #[tokio::test]
        async fn it_returns_none_for_an_invalid_subreddit() {
            let counts = Subreddit::test("doesnotexist")
                .count_words(["rust"], MatchPolicy::Scan)
                .await;
            assert_eq!(counts, None);
        }

        #[tokio::test]
        async fn it_returns_none_if_a_later_page_fails() {
            let counts = Subreddit::test("broken")
                .count_words(["rust"], MatchPolicy::Scan)
                .await;
            assert_eq!(counts, None);
        }
    }
}
