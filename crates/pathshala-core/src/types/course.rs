//! Course record and its enumerated classifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Category, Instructor};
use crate::errors::CatalogError;

/// Difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Teaching language. `Both` courses are taught in English and Nepali.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Nepali,
    Both,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::English, Self::Nepali, Self::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Nepali => "Nepali",
            Self::Both => "Both",
        }
    }

    /// Whether a course taught in `self` satisfies a request for `wanted`.
    pub fn satisfies(&self, wanted: Language) -> bool {
        *self == wanted || *self == Self::Both
    }
}

/// Promotional badge. A course may carry any combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoFlag {
    Featured,
    Popular,
    New,
}

impl PromoFlag {
    pub const ALL: [PromoFlag; 3] = [Self::Featured, Self::Popular, Self::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Popular => "popular",
            Self::New => "new",
        }
    }
}

macro_rules! impl_token {
    ($ty:ty, $field:literal, $($token:literal => $variant:expr),+ $(,)?) => {
        impl FromStr for $ty {
            type Err = CatalogError;

            /// Case-insensitive match against the UI vocabulary.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim().to_ascii_lowercase();
                match token.as_str() {
                    $($token => Ok($variant),)+
                    _ => Err(CatalogError::unknown($field, s)),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_token!(Level, "level",
    "beginner" => Level::Beginner,
    "intermediate" => Level::Intermediate,
    "advanced" => Level::Advanced,
);

impl_token!(Language, "language",
    "english" => Language::English,
    "nepali" => Language::Nepali,
    "both" => Language::Both,
);

impl_token!(PromoFlag, "shelf",
    "featured" => PromoFlag::Featured,
    "popular" => PromoFlag::Popular,
    "new" => PromoFlag::New,
);

/// One syllabus section: a titled block of ordered topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusSection {
    pub title: String,
    pub duration: String,
    pub topics: Vec<String>,
}

/// A course as shown in the catalog. Instructor and category are embedded by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// List price in rupees.
    pub price: u32,
    /// Sale price in rupees. Takes precedence over `price` when present, including zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<u32>,
    pub instructor: Instructor,
    pub category: Category,
    pub level: Level,
    pub language: Language,
    /// Display string, e.g. "12 weeks".
    pub duration: String,
    pub lessons: u32,
    pub rating: f64,
    pub enrolled_students: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub new: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syllabus: Vec<SyllabusSection>,
}

impl Course {
    /// `discount_price` if present, else `price`.
    pub fn effective_price(&self) -> u32 {
        self.discount_price.unwrap_or(self.price)
    }

    pub fn is_discounted(&self) -> bool {
        self.discount_price.is_some_and(|d| d < self.price)
    }

    pub fn has_flag(&self, flag: PromoFlag) -> bool {
        match flag {
            PromoFlag::Featured => self.featured,
            PromoFlag::Popular => self.popular,
            PromoFlag::New => self.new,
        }
    }

    /// Total topic count across the syllabus.
    pub fn topic_count(&self) -> usize {
        self.syllabus.iter().map(|s| s.topics.len()).sum()
    }
}
