//! Fibonacci series generation.
//!
//! The generator is a plain iterator over the Fibonacci values `1, 1, 2, 3,
//! 5, 8, ...` with two convenience operations on top: [`fib_sequence`]
//! collects the values below an exclusive bound, and [`write_series`] streams
//! them to any [`Write`] sink as space-separated text.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Iterator over Fibonacci values, starting at 1.
///
/// Internal state is the consecutive pair `(a, b)`, initialized to `(0, 1)`
/// and advanced by `(a, b) -> (b, a + b)`; each step yields `b`. The iterator
/// ends when the next value would not fit in a `u64`.
#[derive(Debug, Clone)]
pub struct Fib {
    state: Option<(u64, u64)>,
}

impl Fib {
    pub fn new() -> Self {
        Self { state: Some((0, 1)) }
    }
}

impl Default for Fib {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fib {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let (a, b) = self.state?;
        self.state = a.checked_add(b).map(|next| (b, next));
        Some(b)
    }
}

/// Collect the Fibonacci values strictly below `bound`, in generation order.
///
/// Pure and deterministic; bounds of 0 or 1 produce an empty vector. The
/// result starts with two 1s (the value 1 occurs twice in the series) and is
/// strictly increasing afterwards.
pub fn fib_sequence(bound: u64) -> Vec<u64> {
    Fib::new().take_while(|&v| v < bound).collect()
}

/// Write the Fibonacci values strictly below `bound` to `out`.
///
/// Each value is followed by a single space, and the series is terminated by
/// a newline. When no values qualify only the newline is written.
pub fn write_series<W: Write>(out: &mut W, bound: u64) -> io::Result<()> {
    for v in Fib::new().take_while(|&v| v < bound) {
        write!(out, "{v} ")?;
    }
    writeln!(out)
}

/// Structured summary of one generation run, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesReport {
    /// Exclusive upper bound the series was generated against.
    pub bound: u64,
    /// Generated values, in order.
    pub values: Vec<u64>,
}

impl SeriesReport {
    pub fn new(bound: u64) -> Self {
        Self {
            bound,
            values: fib_sequence(bound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterator_yields_series_from_one() {
        let head: Vec<u64> = Fib::new().take(8).collect();
        assert_eq!(head, vec![1, 1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn test_iterator_ends_at_u64_range() {
        let last = Fib::new().last().unwrap();
        // F(93) is the largest Fibonacci number that fits in a u64
        assert_eq!(last, 12_200_160_415_121_876_738);
        assert_eq!(Fib::new().count(), 93);
    }

    #[test]
    fn test_sequence_below_ten() {
        assert_eq!(fib_sequence(10), vec![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_sequence_empty_for_small_bounds() {
        assert_eq!(fib_sequence(0), Vec::<u64>::new());
        assert_eq!(fib_sequence(1), Vec::<u64>::new());
    }

    #[test]
    fn test_sequence_bound_is_exclusive() {
        assert_eq!(fib_sequence(2), vec![1, 1]);
        assert_eq!(fib_sequence(9), vec![1, 1, 2, 3, 5, 8]);
        assert_eq!(fib_sequence(8), vec![1, 1, 2, 3, 5]);
    }

    #[test]
    fn test_write_series_formatting() {
        let mut buf = Vec::new();
        write_series(&mut buf, 10).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 1 2 3 5 8 \n");
    }

    #[test]
    fn test_write_series_empty_line_for_small_bound() {
        let mut buf = Vec::new();
        write_series(&mut buf, 1).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\n");
    }

    #[test]
    fn test_report_round_trip() {
        let report = SeriesReport::new(10);
        let json = serde_json::to_string(&report).unwrap();
        let back: SeriesReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
