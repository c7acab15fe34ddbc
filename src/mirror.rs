use std::{collections::BTreeSet, error, fmt::Display, ops::RangeInclusive};

use log::warn;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidRangeText(String),
    InvalidRangeBound(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRangeText(s) => {
                write!(f, "Invalid text({}) for range, expect <low>-<high>.", s)
            }
            Error::InvalidRangeBound(s) => write!(
                f,
                "Invalid bound({}) for range, expect a non-negative number.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdRange {
    low: u64,
    high: u64,
}

impl TryFrom<&str> for IdRange {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parts = value.split('-').collect::<Vec<_>>();
        if parts.len() != 2 {
            return Err(Error::InvalidRangeText(value.to_string()));
        }

        let parse_bound = |s: &str| {
            s.trim()
                .parse::<u64>()
                .map_err(|_| Error::InvalidRangeBound(s.to_string()))
        };

        Ok(Self::new(parse_bound(parts[0])?, parse_bound(parts[1])?))
    }
}

impl IdRange {
    pub fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    pub fn ids(&self) -> RangeInclusive<u64> {
        self.low..=self.high
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorScan {
    pub mirrors: Vec<u64>,
    pub sum: u64,
}

pub fn is_mirror(n: u64) -> bool {
    let s = n.to_string();
    if s.len() % 2 != 0 {
        return false;
    }

    let (front, rear) = s.split_at(s.len() / 2);
    front == rear
}

/// All divisors of `n`, ascending.
fn divisors(n: usize) -> BTreeSet<usize> {
    let mut divs = BTreeSet::new();
    let mut i = 1;
    while i * i <= n {
        if n % i == 0 {
            divs.insert(i);
            divs.insert(n / i);
        }
        i += 1;
    }

    divs
}

/// Whether the digits of `n` are some shorter prefix of them repeated at least twice.
pub fn is_repeated_pattern(n: u64) -> bool {
    let s = n.to_string();
    let len = s.len();
    divisors(len)
        .into_iter()
        .filter(|&d| d != 0 && d != len)
        .any(|d| s[..d].repeat(len / d) == s)
}

fn valid_ranges<S: AsRef<str>>(texts: &[S]) -> impl Iterator<Item = IdRange> + '_ {
    texts.iter().filter_map(|s| {
        IdRange::try_from(s.as_ref())
            .inspect_err(|e| warn!("Skip range: {}", e))
            .ok()
    })
}

/// Collect mirror numbers in every valid range, in range order and ascending inside a
/// range. Overlapping ranges are counted once per range.
pub fn find_mirrors<S: AsRef<str>>(texts: &[S]) -> MirrorScan {
    let mirrors = valid_ranges(texts)
        .flat_map(|r| r.ids().filter(|&n| is_mirror(n)))
        .collect::<Vec<_>>();
    let sum = mirrors.iter().sum();

    MirrorScan { mirrors, sum }
}

pub fn sum_repeated_patterns<S: AsRef<str>>(texts: &[S]) -> u64 {
    valid_ranges(texts)
        .flat_map(|r| r.ids().filter(|&n| is_repeated_pattern(n)))
        .sum()
}

#[test]
fn test_parse_range() {
    assert_eq!(IdRange::try_from("10-20"), Ok(IdRange::new(10, 20)));
    assert_eq!(
        IdRange::try_from("10"),
        Err(Error::InvalidRangeText("10".to_string()))
    );
    assert_eq!(
        IdRange::try_from("1-2-3"),
        Err(Error::InvalidRangeText("1-2-3".to_string()))
    );
    assert_eq!(
        IdRange::try_from("a-20"),
        Err(Error::InvalidRangeBound("a".to_string()))
    );
    assert_eq!(
        IdRange::try_from("10-"),
        Err(Error::InvalidRangeBound("".to_string()))
    );
}

#[test]
fn test_is_mirror() {
    for n in [11, 5555, 123123, 89458945] {
        assert!(is_mirror(n), "{} should be a mirror", n);
    }
    for n in [0, 7, 12, 123, 1234, 123456, 11111] {
        assert!(!is_mirror(n), "{} shouldn't be a mirror", n);
    }
}

#[test]
fn test_doubled_digits_are_mirrors() {
    for half in [1u64, 9, 10, 42, 1000, 98765] {
        let doubled = format!("{}{}", half, half).parse::<u64>().unwrap();
        assert!(is_mirror(doubled), "{} should be a mirror", doubled);
        assert!(is_repeated_pattern(doubled), "{} should repeat", doubled);
    }
}

#[test]
fn test_divisors() {
    assert_eq!(divisors(1).into_iter().collect::<Vec<_>>(), [1]);
    assert_eq!(divisors(6).into_iter().collect::<Vec<_>>(), [1, 2, 3, 6]);
    assert_eq!(divisors(9).into_iter().collect::<Vec<_>>(), [1, 3, 9]);
    assert_eq!(divisors(10).into_iter().collect::<Vec<_>>(), [1, 2, 5, 10]);
}

#[test]
fn test_is_repeated_pattern() {
    for n in [11, 111, 1212, 123123123, 565656, 2121212121, 824824824] {
        assert!(is_repeated_pattern(n), "{} should repeat", n);
    }
    for n in [0, 5, 12, 121, 1231, 1212121, 1010101] {
        assert!(!is_repeated_pattern(n), "{} shouldn't repeat", n);
    }
}

#[test]
fn test_repeated_chunks_are_flagged() {
    for chunk in ["1", "7", "12", "305", "9090"] {
        for times in 2..=4 {
            let n = chunk.repeat(times).parse::<u64>().unwrap();
            assert!(is_repeated_pattern(n), "{} should repeat", n);
        }
    }
}

#[test]
fn test_find_mirrors() {
    assert_eq!(
        find_mirrors(&["10-20"]),
        MirrorScan {
            mirrors: vec![11],
            sum: 11
        }
    );
    assert_eq!(
        find_mirrors(&["10-100"]),
        MirrorScan {
            mirrors: vec![11, 22, 33, 44, 55, 66, 77, 88, 99],
            sum: 495
        }
    );
}

#[test]
fn test_find_mirrors_keeps_range_order() {
    let scan = find_mirrors(&["95-115", "11-22", "bad", "5-1"]);
    assert_eq!(scan.mirrors, [99, 11, 22]);
    assert_eq!(scan.sum, 132);

    let scan = find_mirrors(&["10-30", "20-25"]);
    assert_eq!(scan.mirrors, [11, 22, 22]);
}

#[test]
fn test_sum_repeated_patterns() {
    assert_eq!(sum_repeated_patterns(&["11-22"]), 33);
    assert_eq!(sum_repeated_patterns(&["95-115"]), 99 + 111);
    assert_eq!(sum_repeated_patterns(&["998-1012", "x-1", "1-2-3"]), 999 + 1010);
    assert_eq!(sum_repeated_patterns(&["1-9"]), 0);
}
