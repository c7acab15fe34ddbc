use std::path::PathBuf;

use clap::Parser;

pub mod console;
pub mod dial;
pub mod input;
pub mod mirror;
pub mod puzzle;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct ConsoleCLIArgs {
    /// Directory holding the puzzle inputs (problem_1, problem_2, ...).
    #[arg(long, default_value = "problem_files")]
    pub input_dir: PathBuf,
    /// Solve this day once and exit, instead of showing the menu.
    #[arg(long)]
    pub day: Option<i64>,
}

/// Route diagnostics to stderr, showing warnings unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
