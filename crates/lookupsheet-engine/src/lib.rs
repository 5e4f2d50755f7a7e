//! lookupsheet_engine - Cell engine for typed sheets with lookup cells.

pub mod engine;
