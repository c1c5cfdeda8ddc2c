use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use super::CourseSource;
use crate::error::{EngineError, Result};
use crate::model::Course;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for a remote course database. Base URL and key are injected
/// from configuration.
pub struct GolfCourseApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GolfCourseApiClient {
    /// # Errors
    /// Returns `Config` if the base URL or key is empty, or `Network` if the
    /// HTTP client can't be built.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_key = api_key.into();
        if base_url.is_empty() {
            return Err(EngineError::Config("course api base url is empty".into()));
        }
        if api_key.trim().is_empty() {
            return Err(EngineError::Config("course api key is empty".into()));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CourseSource for GolfCourseApiClient {
    async fn search_by_name(&self, name: &str) -> Result<Option<Course>> {
        let mut url = Url::parse(&format!("{}/courses", self.base_url))
            .map_err(|e| EngineError::Config(format!("course api base url: {e}")))?;
        url.query_pairs_mut().append_pair("name", name);
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(EngineError::Network(format!(
                "course search returned {}",
                resp.status()
            )));
        }

        let courses: Vec<Course> = resp.json().await?;
        Ok(courses.into_iter().next())
    }
}
