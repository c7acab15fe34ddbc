use anyhow::{Context, Result};
use clap::Parser;
use secret_entrance::{input, mirror, CLIArgs};

fn main() -> Result<()> {
    secret_entrance::init_logger();
    let args = CLIArgs::parse();
    let ranges = input::read_tokens(&args.input_path, ',').with_context(|| {
        format!(
            "Failed to read ID ranges from given file({}).",
            args.input_path.display()
        )
    })?;

    let scan = mirror::find_mirrors(&ranges);
    println!(
        "Found {} mirror number(s) in given ranges, their sum is {}.",
        scan.mirrors.len(),
        scan.sum
    );
    println!(
        "The sum of repeated pattern numbers in given ranges is {}.",
        mirror::sum_repeated_patterns(&ranges)
    );

    Ok(())
}
