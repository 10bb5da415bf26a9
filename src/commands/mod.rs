//! CLI commands

pub mod scaffold;
pub mod utils;
