//! Course categories.

use serde::{Deserialize, Serialize};

use crate::constants::SLUG_SEPARATOR;

/// A course category.
///
/// `courses` is a stored display figure, not derived from the collection, and
/// can drift from the real number of courses in the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon identifier understood by the display layer.
    pub icon: String,
    pub courses: u32,
}

impl Category {
    pub fn slug(&self) -> String {
        category_slug(&self.name)
    }
}

/// Lower-case `name` and collapse every run of whitespace or hyphens into one `-`.
///
/// `"Web  Development"`, `"web-development"` and `" WEB - development "` all
/// map to `"web-development"`.
pub fn category_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() || ch == SLUG_SEPARATOR {
            pending_separator = true;
            continue;
        }
        if pending_separator && !slug.is_empty() {
            slug.push(SLUG_SEPARATOR);
        }
        pending_separator = false;
        slug.extend(ch.to_lowercase());
    }
    slug
}
