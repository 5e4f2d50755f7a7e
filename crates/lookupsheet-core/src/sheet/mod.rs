//! Sheet state and the cell assignment pipeline.

mod ops;
mod state;

pub use state::Sheet;
