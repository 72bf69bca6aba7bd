use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub name: String,
    pub avatar: String,
}

/// A learner review. `rating` is a whole number of stars, 1 through 5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub user: Reviewer,
    pub rating: u8,
    pub comment: String,
    /// Display string, e.g. "March 2, 2024".
    pub date: String,
}
