//! Planner module - turning correction records into safe renames

pub mod execute;
pub mod paths;
pub mod plan;

pub use execute::*;
pub use paths::*;
pub use plan::*;
