pub mod cli;
pub mod load_config;

pub use cli::{exit_code, exit_status, run, Cli, OutputFormat};
