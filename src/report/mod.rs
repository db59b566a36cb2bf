//! Report module - previews, result summaries and JSON export

pub mod export;
pub mod preview;
pub mod summary;

pub use export::*;
pub use preview::*;
pub use summary::*;
