use std::{error, fmt::Display};

use log::warn;

const DIAL_SIZE: u64 = 100;
const START_POSITION: u64 = 50;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidDirection(String),
    InvalidMagnitude(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDirection(s) => write!(
                f,
                "Invalid instruction({}), expect it to start with L or R.",
                s
            ),
            Error::InvalidMagnitude(s) => write!(
                f,
                "Invalid instruction({}), expect a non-negative number after its direction.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    dir: Direction,
    magnitude: u64,
}

impl TryFrom<&str> for Instruction {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let dir = match chars.next() {
            Some('L') => Direction::Left,
            Some('R') => Direction::Right,
            _ => return Err(Error::InvalidDirection(value.to_string())),
        };
        let magnitude = chars
            .as_str()
            .parse::<u64>()
            .map_err(|_| Error::InvalidMagnitude(value.to_string()))?;

        Ok(Self { dir, magnitude })
    }
}

impl Instruction {
    pub fn new(dir: Direction, magnitude: u64) -> Self {
        Self { dir, magnitude }
    }

    /// Number of single steps from `pos` until the dial first lands on 0.
    /// Standing on 0 already means a full lap is needed.
    fn steps_to_zero(&self, pos: u64) -> u64 {
        let steps = match self.dir {
            Direction::Right => (DIAL_SIZE - pos) % DIAL_SIZE,
            Direction::Left => pos % DIAL_SIZE,
        };

        if steps == 0 {
            DIAL_SIZE
        } else {
            steps
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    pos: u64,
}

impl Default for Dial {
    fn default() -> Self {
        Self::new(START_POSITION)
    }
}

impl Dial {
    pub fn new(pos: u64) -> Self {
        Self {
            pos: pos % DIAL_SIZE,
        }
    }

    pub fn pos(&self) -> u64 {
        self.pos
    }

    pub fn turn(self, inst: &Instruction) -> Self {
        let offset = inst.magnitude % DIAL_SIZE;
        let pos = match inst.dir {
            Direction::Right => self.pos + offset,
            Direction::Left => self.pos + DIAL_SIZE - offset,
        };

        Self::new(pos)
    }

    /// How many times the dial points at 0 while `inst` is being carried out click by click.
    pub fn zero_clicks(&self, inst: &Instruction) -> u64 {
        let first = inst.steps_to_zero(self.pos);
        if inst.magnitude < first {
            0
        } else {
            1 + (inst.magnitude - first) / DIAL_SIZE
        }
    }
}

/// Count instructions after which the dial rests exactly on 0. Invalid instructions are
/// reported and skipped.
pub fn count_exact_landings<S: AsRef<str>>(insts: &[S]) -> u64 {
    let (_, count) = insts
        .iter()
        .map(|s| s.as_ref())
        .filter_map(|s| {
            Instruction::try_from(s)
                .inspect_err(|e| warn!("Skip instruction: {}", e))
                .ok()
        })
        .fold((Dial::default(), 0), |(dial, count), inst| {
            let dial = dial.turn(&inst);
            (dial, count + u64::from(dial.pos() == 0))
        });

    count
}

/// Count every click landing on 0, including the ones passed in the middle of a turn.
/// Fails on the first invalid instruction.
pub fn count_zero_crossings<S: AsRef<str>>(insts: &[S]) -> Result<u64, Error> {
    let (_, count) = insts.iter().map(|s| s.as_ref()).try_fold(
        (Dial::default(), 0),
        |(dial, count), s| {
            let inst = Instruction::try_from(s)?;
            Ok::<_, Error>((dial.turn(&inst), count + dial.zero_clicks(&inst)))
        },
    )?;

    Ok(count)
}

#[test]
fn test_parse_instruction() {
    assert_eq!(
        Instruction::try_from("R48"),
        Ok(Instruction::new(Direction::Right, 48))
    );
    assert_eq!(
        Instruction::try_from("L0"),
        Ok(Instruction::new(Direction::Left, 0))
    );
    assert_eq!(
        Instruction::try_from("X50"),
        Err(Error::InvalidDirection("X50".to_string()))
    );
    assert_eq!(
        Instruction::try_from("r50"),
        Err(Error::InvalidDirection("r50".to_string()))
    );
    assert_eq!(
        Instruction::try_from("L"),
        Err(Error::InvalidMagnitude("L".to_string()))
    );
    assert_eq!(
        Instruction::try_from("R1x"),
        Err(Error::InvalidMagnitude("R1x".to_string()))
    );
    assert_eq!(
        Instruction::try_from("R-5"),
        Err(Error::InvalidMagnitude("R-5".to_string()))
    );
}

#[test]
fn test_turn_wraps() {
    let dial = Dial::default();
    assert_eq!(dial.turn(&Instruction::new(Direction::Right, 50)).pos(), 0);
    assert_eq!(dial.turn(&Instruction::new(Direction::Left, 68)).pos(), 82);
    assert_eq!(dial.turn(&Instruction::new(Direction::Left, 250)).pos(), 0);
    assert_eq!(dial.turn(&Instruction::new(Direction::Right, 0)).pos(), 50);
}

#[test]
fn test_exact_landings() {
    assert_eq!(count_exact_landings(&["R50"]), 1);
    assert_eq!(count_exact_landings(&["R25"]), 0);
    assert_eq!(count_exact_landings(&["L50", "R100", "L300"]), 3);
    assert_eq!(
        count_exact_landings(&["L68", "L30", "R48", "L5", "R60", "L55", "L1", "L99", "R14", "L82"]),
        3
    );
}

#[test]
fn test_exact_landings_skip_invalid() {
    assert_eq!(count_exact_landings(&["X50"]), 0);
    assert_eq!(count_exact_landings(&["X50", "R50", "Lfoo"]), 1);
}

#[test]
fn test_zero_clicks() {
    let dial = Dial::default();
    assert_eq!(dial.zero_clicks(&Instruction::new(Direction::Right, 50)), 1);
    assert_eq!(dial.zero_clicks(&Instruction::new(Direction::Right, 150)), 2);
    assert_eq!(dial.zero_clicks(&Instruction::new(Direction::Right, 25)), 0);
    assert_eq!(dial.zero_clicks(&Instruction::new(Direction::Left, 50)), 1);
    assert_eq!(dial.zero_clicks(&Instruction::new(Direction::Left, 0)), 0);

    let dial = Dial::new(0);
    assert_eq!(dial.zero_clicks(&Instruction::new(Direction::Left, 5)), 0);
    assert_eq!(dial.zero_clicks(&Instruction::new(Direction::Right, 100)), 1);
    assert_eq!(dial.zero_clicks(&Instruction::new(Direction::Left, 300)), 3);
}

#[test]
fn test_zero_crossings() {
    assert_eq!(count_zero_crossings(&["R50"]), Ok(1));
    assert_eq!(count_zero_crossings(&["R150"]), Ok(2));
    assert_eq!(count_zero_crossings(&["R25"]), Ok(0));
    assert_eq!(count_zero_crossings(&["R0", "L0"]), Ok(0));
    assert_eq!(count_zero_crossings(&["R1000"]), Ok(10));
    assert_eq!(
        count_zero_crossings(&["L68", "L30", "R48", "L5", "R60", "L55", "L1", "L99", "R14", "L82"]),
        Ok(6)
    );
}

#[test]
fn test_zero_crossings_fail_on_invalid() {
    assert_eq!(
        count_zero_crossings(&["R50", "X50", "R100"]),
        Err(Error::InvalidDirection("X50".to_string()))
    );
}
