//! Ingest module - reading correction tables from CSV

pub mod columns;
pub mod dialect;
pub mod discover;
pub mod loader;

pub use columns::*;
pub use dialect::*;
pub use discover::*;
pub use loader::*;
