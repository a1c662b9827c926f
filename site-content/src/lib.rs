pub mod cli;
pub mod delivery;
pub mod load_config;

pub use cli::{run, Cli, Commands};
