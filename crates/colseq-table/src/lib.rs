//! List and record utilities for tabular data.
//!
//! - **list**: order-preserving set operations (difference, intersection,
//!   union, uniqueness, duplicates) over optionally case-folded strings
//! - **record**: build positional records from named fields for a fixed
//!   column schema, e.g. the columns of a CSV file

mod error;
pub mod list;
pub mod record;

// === Error Types ===
pub use error::{Result, TableError};

// === Lists ===
pub use list::{CaseMode, ListManager};

// === Records ===
pub use record::RecordBuilder;
