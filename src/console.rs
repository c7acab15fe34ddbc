use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::puzzle::{self, PUZZLES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Solve(i64),
    Invalid,
}

impl From<&str> for Command {
    fn from(value: &str) -> Self {
        static QUIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(q|quit|exit)$").unwrap());
        static DAY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+").unwrap());

        let value = value.trim().to_lowercase();
        if QUIT_PATTERN.is_match(&value) {
            Command::Quit
        } else if let Some(day) = DAY_PATTERN
            .find(&value)
            .and_then(|m| m.as_str().parse::<i64>().ok())
        {
            Command::Solve(day)
        } else {
            Command::Invalid
        }
    }
}

/// Interactive menu reading commands from `reader` and printing to `writer`, until
/// asked to quit or the input runs out.
pub struct Console<R, W> {
    input_dir: PathBuf,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input_dir: PathBuf, reader: R, writer: W) -> Self {
        Self {
            input_dir,
            reader,
            writer,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_welcome()?;

        let mut buf = String::new();
        loop {
            write!(self.writer, "\nSelect a day ({}) or \"q\" to quit: ", day_span())?;
            self.writer.flush()?;

            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                debug!("Input closed, leave the console.");
                writeln!(self.writer)?;
                break;
            }

            match Command::from(buf.as_str()) {
                Command::Quit => {
                    writeln!(
                        self.writer,
                        "\nThanks for using Advent Calendar Challenge Solutions!"
                    )?;
                    writeln!(self.writer, "{}\n", rule())?;
                    break;
                }
                Command::Solve(day) => {
                    self.solve_day(day)?;
                }
                Command::Invalid => writeln!(
                    self.writer,
                    "\nInvalid input. Please enter a number ({}) or \"q\" to quit.",
                    day_span()
                )?,
            }
        }

        Ok(())
    }

    /// Solve the given day and print its answer. Returns false if the day isn't
    /// available or its solver failed.
    pub fn solve_day(&mut self, day: i64) -> Result<bool> {
        let Some(puzzle) = usize::try_from(day).ok().and_then(puzzle::find) else {
            writeln!(self.writer, "\nDay {} is not available yet.", day)?;
            return Ok(false);
        };

        writeln!(self.writer, "\nSolving Day {}...", day)?;
        match puzzle.solve_in(&self.input_dir) {
            Ok(answer) => {
                writeln!(self.writer, "\n{}", answer)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.writer, "\nError solving Day {}:", day)?;
                writeln!(self.writer, "   {:#}", e)?;
                Ok(false)
            }
        }
    }

    fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.writer, "\n{}", rule())?;
        writeln!(self.writer, "Advent Calendar Challenge Solutions")?;
        writeln!(self.writer, "{}", rule())?;
        writeln!(self.writer, "\nAvailable Days:")?;
        for p in PUZZLES.iter() {
            writeln!(self.writer, "  {}. {}", p.day, p.title)?;
        }
        writeln!(self.writer, "\n{}", rule())?;

        Ok(())
    }
}

fn rule() -> String {
    "=".repeat(60)
}

fn day_span() -> String {
    let first = PUZZLES.iter().map(|p| p.day).min().unwrap_or(0);
    let last = PUZZLES.iter().map(|p| p.day).max().unwrap_or(0);
    format!("{}-{}", first, last)
}

#[cfg(test)]
fn run_console(input: &str) -> String {
    let mut output = Vec::new();
    Console::new(PathBuf::from("problem_files"), input.as_bytes(), &mut output)
        .run()
        .unwrap();

    String::from_utf8(output).unwrap()
}

#[test]
fn test_parse_command() {
    assert_eq!(Command::from("q"), Command::Quit);
    assert_eq!(Command::from("  QUIT \n"), Command::Quit);
    assert_eq!(Command::from("exit"), Command::Quit);
    assert_eq!(Command::from("2"), Command::Solve(2));
    assert_eq!(Command::from("1abc"), Command::Solve(1));
    assert_eq!(Command::from("-3"), Command::Solve(-3));
    assert_eq!(Command::from("quitting"), Command::Invalid);
    assert_eq!(Command::from("abc"), Command::Invalid);
    assert_eq!(Command::from(""), Command::Invalid);
}

#[test]
fn test_console_lists_days_and_quits() {
    let output = run_console("q\n");
    assert!(output.contains("  1. Secret Entrance - Dial Password"));
    assert!(output.contains("  2. Secret Entrance - Mirror Numbers"));
    assert!(output.contains("Select a day (1-2) or \"q\" to quit: "));
    assert!(output.contains("Thanks for using"));
}

#[test]
fn test_console_recovers_from_bad_input() {
    let output = run_console("hello\n7\n0\nexit\n");
    assert!(output.contains("Invalid input. Please enter a number (1-2)"));
    assert!(output.contains("Day 7 is not available yet."));
    assert!(output.contains("Day 0 is not available yet."));
    assert!(output.contains("Thanks for using"));
}

#[test]
fn test_console_stops_at_end_of_input() {
    let output = run_console("");
    assert!(output.contains("Available Days:"));
    assert!(!output.contains("Thanks for using"));
}

#[test]
fn test_console_solves_days() {
    let output = run_console("1\n2\nq\n");
    assert!(output.contains("Day 1: Secret Entrance - Dial Password"));
    assert!(output.contains("Part 1 Password: 3"));
    assert!(output.contains("Part 2 Password: 6"));
    assert!(output.contains("Part 1 Password: 1227775554"));
    assert!(output.contains("Part 2 Password: 4174379265"));
    assert!(output.contains("Found 8 mirror numbers"));
}

#[test]
fn test_console_reports_solver_errors() {
    let mut output = Vec::new();
    Console::new(PathBuf::from("no_such_dir"), "1\nq\n".as_bytes(), &mut output)
        .run()
        .unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Error solving Day 1:"));
    assert!(output.contains("Thanks for using"));
}
