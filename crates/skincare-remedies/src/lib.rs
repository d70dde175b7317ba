//! Home remedy catalog for skincare
//!
//! A fixed, versioned table of remedies per skin concern, the lookup that
//! resolves free-text concerns against it, and the attribute/value table
//! each remedy is displayed as.

pub mod catalog;
pub mod error;
pub mod lookup;
pub mod table;

pub use catalog::{RemedyCatalog, RemedyRecord, SUPPORTED_VERSION};
pub use error::CatalogError;
pub use lookup::{normalize_concern, LookupOutcome};
pub use table::{RemedyTable, DETAILS_PADDING};
