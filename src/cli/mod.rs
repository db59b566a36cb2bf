//! CLI module - argument parsing and interactive prompts

mod args;
mod prompts;

pub use args::{default_base_dir, Cli, RunConfig};
pub use prompts::*;
