//! Sheet export.

mod csv;

pub use csv::{to_csv, write_csv};
