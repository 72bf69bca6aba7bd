//! Stable error codes for consumers that branch on error kind.

/// Maps an error to a stable `SCREAMING_SNAKE` code.
pub trait CatalogErrorCode {
    fn error_code(&self) -> &'static str;

    /// `"[CODE] message"`, the form the display layer shows in its error banner.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}
