//! Catalog error types.

use super::error_code::CatalogErrorCode;

/// Errors raised while loading the catalog, reading config, or looking up records.
///
/// The query pipeline itself never returns one of these: an empty result is a
/// value, not an error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed catalog data: {0}")]
    DataLoad(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid {kind} {id}: {reason}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        reason: String,
    },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("unknown {field} value: {value:?}")]
    UnknownValue { field: &'static str, value: String },

    #[error("course not found: {id}")]
    CourseNotFound { id: String },
}

impl CatalogError {
    pub fn invalid(kind: &'static str, id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            kind,
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            field,
            value: value.into(),
        }
    }
}

impl CatalogErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CATALOG_IO_ERROR",
            Self::DataLoad(_) => "CATALOG_DATA_LOAD_ERROR",
            Self::Config(_) => "CATALOG_CONFIG_ERROR",
            Self::InvalidRecord { .. } => "CATALOG_INVALID_RECORD",
            Self::DuplicateId { .. } => "CATALOG_DUPLICATE_ID",
            Self::UnknownValue { .. } => "CATALOG_UNKNOWN_VALUE",
            Self::CourseNotFound { .. } => "CATALOG_COURSE_NOT_FOUND",
        }
    }
}

/// Convenience type alias.
pub type CatalogResult<T> = Result<T, CatalogError>;
