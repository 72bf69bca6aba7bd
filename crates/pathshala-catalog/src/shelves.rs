//! Home-page shelves: featured, popular, and new courses.

use tracing::debug;

use pathshala_core::{Course, PromoFlag};

/// Courses carrying `flag`, in collection order, at most `limit`.
///
/// `None` means no flag filter: the first `limit` courses.
pub fn promoted<'a>(
    courses: &'a [Course],
    flag: Option<PromoFlag>,
    limit: usize,
) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|c| flag.map_or(true, |f| c.has_flag(f)))
        .take(limit)
        .collect()
}

/// Parse a shelf tab token. Unknown tokens show the unfiltered shelf.
pub fn shelf_flag(token: &str) -> Option<PromoFlag> {
    match token.parse() {
        Ok(flag) => Some(flag),
        Err(e) => {
            debug!(token, error = %e, "unknown shelf, showing all courses");
            None
        }
    }
}
