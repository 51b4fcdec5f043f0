//! Report output formatting.

pub mod csv;

pub use self::csv::{save_to_csv, write_records};
