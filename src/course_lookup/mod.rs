pub mod bundled;
pub mod client;

pub use bundled::bundled_courses;
pub use client::GolfCourseApiClient;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::model::Course;
use crate::storage::{KvStore, kv_get_json, kv_put_json};

const COURSE_KEY_PREFIX: &str = "course-";

#[must_use]
pub fn course_key(course_id: &str) -> String {
    format!("{COURSE_KEY_PREFIX}{course_id}")
}

/// A remote course database.
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn search_by_name(&self, name: &str) -> Result<Option<Course>>;
}

/// Best-effort course search: cached courses, then the bundled dataset, then
/// the remote source if one is configured. Remote hits are cached.
pub struct CourseLookup {
    store: Arc<dyn KvStore>,
    bundled: Vec<Course>,
    remote: Option<Box<dyn CourseSource>>,
}

impl CourseLookup {
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>, bundled: Vec<Course>) -> Self {
        Self {
            store,
            bundled,
            remote: None,
        }
    }

    #[must_use]
    pub fn with_remote(mut self, remote: Box<dyn CourseSource>) -> Self {
        self.remote = Some(remote);
        self
    }

    fn cached_courses(&self) -> Vec<Course> {
        let keys = match self.store.keys_with_prefix(COURSE_KEY_PREFIX) {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(error = %e, "course cache unavailable");
                return Vec::new();
            }
        };
        keys.iter()
            .filter_map(|key| match kv_get_json::<Course>(self.store.as_ref(), key) {
                Ok(course) => Some(course),
                Err(e) => {
                    tracing::warn!(error = %e, key = %key, "skipping unreadable cached course");
                    None
                }
            })
            .collect()
    }

    /// Store a course so later lookups find it without the remote source.
    ///
    /// # Errors
    /// Returns an error if the store write fails.
    pub fn cache_course(&self, course: &Course) -> Result<()> {
        kv_put_json(self.store.as_ref(), &course_key(&course.id), course)?;
        Ok(())
    }

    /// First course whose name contains `name`, ignoring case.
    ///
    /// Never fails: a broken cache or unreachable remote is logged and skipped.
    pub async fn find_by_name(&self, name: &str) -> Option<Course> {
        if let Some(course) = self
            .cached_courses()
            .into_iter()
            .find(|c| c.name_matches(name))
        {
            tracing::debug!(course = %course.id, "course found in cache");
            return Some(course);
        }

        if let Some(course) = self.bundled.iter().find(|c| c.name_matches(name)) {
            tracing::debug!(course = %course.id, "course found in bundled dataset");
            return Some(course.clone());
        }

        let remote = self.remote.as_ref()?;
        match remote.search_by_name(name).await {
            Ok(Some(course)) => {
                if let Err(e) = self.cache_course(&course) {
                    tracing::warn!(error = %e, course = %course.id, "failed to cache course");
                }
                Some(course)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, name, "remote course lookup failed");
                None
            }
        }
    }
}
