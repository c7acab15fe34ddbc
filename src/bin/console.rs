use std::io::{stdin, stdout};

use anyhow::{bail, Result};
use clap::Parser;
use secret_entrance::{console::Console, ConsoleCLIArgs};

fn main() -> Result<()> {
    secret_entrance::init_logger();
    let args = ConsoleCLIArgs::parse();

    let mut console = Console::new(args.input_dir, stdin().lock(), stdout().lock());
    if let Some(day) = args.day {
        if !console.solve_day(day)? {
            bail!("Failed to solve day {}.", day);
        }
    } else {
        console.run()?;
    }

    Ok(())
}
