use std::{fmt::Display, path::Path};

use anyhow::{Context, Result};

use crate::{dial, input, mirror};

const SAMPLE_MIRROR_COUNT: usize = 5;

// (part 1, part 2, details)
type Solution = (Option<u64>, Option<u64>, Option<Details>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details {
    pub mirror_count: Option<usize>,
    pub sample_mirrors: Option<Vec<u64>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleAnswer {
    pub day: usize,
    pub title: &'static str,
    pub part1: Option<u64>,
    pub part2: Option<u64>,
    pub details: Option<Details>,
}

impl Display for PuzzleAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{}", rule)?;
        writeln!(f, "Day {}: {}", self.day, self.title)?;
        writeln!(f, "{}", rule)?;

        if let Some(part1) = self.part1 {
            writeln!(f, "Part 1 Password: {}", part1)?;
        }
        if let Some(part2) = self.part2 {
            writeln!(f, "Part 2 Password: {}", part2)?;
        }

        if let Some(details) = &self.details {
            writeln!(f, "Additional Information:")?;
            if let Some(count) = details.mirror_count.filter(|&c| c != 0) {
                writeln!(f, "  - Found {} mirror numbers", count)?;
            }
            if let Some(samples) = details.sample_mirrors.as_ref().filter(|s| !s.is_empty()) {
                let samples = samples
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(f, "  - Sample mirrors: {}...", samples)?;
            }
        }

        write!(f, "{}", rule)
    }
}

/// One day of the calendar: where its input lives and how to solve it.
pub struct Puzzle {
    pub day: usize,
    pub title: &'static str,
    pub input_name: &'static str,
    pub separator: char,
    solver: fn(&[String]) -> Result<Solution>,
}

pub static PUZZLES: [Puzzle; 2] = [
    Puzzle {
        day: 1,
        title: "Secret Entrance - Dial Password",
        input_name: "problem_1",
        separator: '\n',
        solver: solve_dial,
    },
    Puzzle {
        day: 2,
        title: "Secret Entrance - Mirror Numbers",
        input_name: "problem_2",
        separator: ',',
        solver: solve_mirror,
    },
];

pub fn find(day: usize) -> Option<&'static Puzzle> {
    PUZZLES.iter().find(|p| p.day == day)
}

impl Puzzle {
    pub fn solve(&self, tokens: &[String]) -> Result<PuzzleAnswer> {
        let (part1, part2, details) = (self.solver)(tokens)?;

        Ok(PuzzleAnswer {
            day: self.day,
            title: self.title,
            part1,
            part2,
            details,
        })
    }

    pub fn solve_file<P: AsRef<Path>>(&self, path: P) -> Result<PuzzleAnswer> {
        let tokens = input::read_tokens(&path, self.separator).with_context(|| {
            format!(
                "Failed to read input of day {} from given file({}).",
                self.day,
                path.as_ref().display()
            )
        })?;

        self.solve(&tokens)
    }

    pub fn solve_in<P: AsRef<Path>>(&self, input_dir: P) -> Result<PuzzleAnswer> {
        self.solve_file(input_dir.as_ref().join(self.input_name))
    }
}

fn solve_dial(tokens: &[String]) -> Result<Solution> {
    let landings = dial::count_exact_landings(tokens);
    let crossings = dial::count_zero_crossings(tokens)
        .context("Failed to count clicks pointing at 0.")?;

    Ok((Some(landings), Some(crossings), None))
}

fn solve_mirror(tokens: &[String]) -> Result<Solution> {
    let scan = mirror::find_mirrors(tokens);
    let pattern_sum = mirror::sum_repeated_patterns(tokens);
    let details = Details {
        mirror_count: Some(scan.mirrors.len()),
        sample_mirrors: Some(
            scan.mirrors
                .iter()
                .take(SAMPLE_MIRROR_COUNT)
                .copied()
                .collect(),
        ),
    };

    Ok((Some(scan.sum), Some(pattern_sum), Some(details)))
}

#[test]
fn test_find_puzzle() {
    assert_eq!(find(1).map(|p| p.input_name), Some("problem_1"));
    assert_eq!(find(2).map(|p| p.separator), Some(','));
    assert!(find(0).is_none());
    assert!(find(3).is_none());
}

#[test]
fn test_solve_dial() {
    let tokens = input::split_tokens("L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n", '\n');
    let answer = PUZZLES[0].solve(&tokens).unwrap();
    assert_eq!(answer.day, 1);
    assert_eq!(answer.part1, Some(3));
    assert_eq!(answer.part2, Some(6));
    assert_eq!(answer.details, None);
}

#[test]
fn test_solve_dial_fails_on_invalid_instruction() {
    let tokens = input::split_tokens("R50\nX50\n", '\n');
    assert!(PUZZLES[0].solve(&tokens).is_err());
}

#[test]
fn test_solve_mirror() {
    let tokens = input::split_tokens(
        "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
         1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
         824824821-824824827,2121212118-2121212124",
        ',',
    );
    let answer = PUZZLES[1].solve(&tokens).unwrap();
    assert_eq!(answer.part1, Some(1227775554));
    assert_eq!(answer.part2, Some(4174379265));
    assert_eq!(
        answer.details,
        Some(Details {
            mirror_count: Some(8),
            sample_mirrors: Some(vec![11, 22, 99, 1010, 1188511885]),
        })
    );
}

#[test]
fn test_display_answer() {
    let answer = PuzzleAnswer {
        day: 2,
        title: "Secret Entrance - Mirror Numbers",
        part1: Some(11),
        part2: None,
        details: Some(Details {
            mirror_count: Some(1),
            sample_mirrors: Some(vec![11]),
        }),
    };
    let text = answer.to_string();
    assert!(text.contains("Day 2: Secret Entrance - Mirror Numbers"));
    assert!(text.contains("Part 1 Password: 11"));
    assert!(!text.contains("Part 2 Password"));
    assert!(text.contains("Found 1 mirror numbers"));
    assert!(text.contains("Sample mirrors: 11..."));
}
