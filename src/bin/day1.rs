use anyhow::{Context, Result};
use clap::Parser;
use secret_entrance::{dial, input, CLIArgs};

fn main() -> Result<()> {
    secret_entrance::init_logger();
    let args = CLIArgs::parse();
    let insts = input::read_tokens(&args.input_path, '\n').with_context(|| {
        format!(
            "Failed to read dial instructions from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The dial stops at 0 {} time(s) after given instructions.",
        dial::count_exact_landings(&insts)
    );
    let clicks = dial::count_zero_crossings(&insts)
        .context("Failed to count clicks pointing at 0 in given instructions.")?;
    println!(
        "The dial points at 0 {} time(s) during given instructions.",
        clicks
    );

    Ok(())
}
