use crate::error::Result;
use crate::model::Course;

const BUNDLED_COURSES: &str = include_str!("../../data/courses.json");

/// Courses shipped with the crate, used when neither the cache nor the remote source has a match.
///
/// # Errors
/// Only fails if the bundled data is broken.
pub fn bundled_courses() -> Result<Vec<Course>> {
    Ok(serde_json::from_str(BUNDLED_COURSES)?)
}
