mod catalog_error;
pub mod error_code;

pub use catalog_error::{CatalogError, CatalogResult};
pub use error_code::CatalogErrorCode;
