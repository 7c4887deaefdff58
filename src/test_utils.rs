use crate::http::{HTTPError, HTTPResult};
use crate::reddit::Subreddit;
use crate::reddit::service::{Page, Resource, Service};
use reqwest::StatusCode;
use std::fs;
use std::sync::Mutex;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Serves canned Reddit responses from `tests/data`.
///
/// `about` requests are answered from `about_<suffix>.json`. The first
/// page of the hot listing comes from `hot_<suffix>.json` and later pages
/// from `hot_<suffix>_<after>.json`. A missing file is answered with a 404.
pub struct TestService {
    suffix: String,
    requests: Mutex<Vec<(Resource, Option<Page>)>>,
}

impl TestService {
    pub fn new(suffix: &str) -> Self {
        Self {
            suffix: String::from(suffix),
            requests: Mutex::new(vec![]),
        }
    }

    /// Every request made so far, in order.
    pub fn requests(&self) -> Vec<(Resource, Option<Page>)> {
        self.requests.lock().expect("poisoned request log").clone()
    }

    fn filename(&self, resource: Resource, page: Option<&Page>) -> String {
        match page.map(|page| page.after.as_str()) {
            Some(after) if !after.is_empty() => {
                format!("tests/data/{resource}_{}_{after}.json", self.suffix)
            }
            _ => format!("tests/data/{resource}_{}.json", self.suffix),
        }
    }
}

impl Service for TestService {
    async fn get_resource(
        &self,
        _subreddit: &str,
        resource: Resource,
        page: Option<&Page>,
    ) -> HTTPResult<String> {
        self.requests
            .lock()
            .expect("poisoned request log")
            .push((resource, page.cloned()));
        fs::read_to_string(self.filename(resource, page))
            .map_err(|_| HTTPError::Http(StatusCode::NOT_FOUND))
    }
}

impl Subreddit<TestService> {
    /// Returns a subreddit whose data is served from the fixtures with
    /// the given `suffix`.
    pub fn test(suffix: &str) -> Self {
        do_logging();
        Subreddit::with_service(suffix, TestService::new(suffix))
    }
}
