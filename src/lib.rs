//! # fibo
//!
//! Fibonacci series generation: an iterator over the series plus two
//! operations on top of it, one collecting the values below an exclusive
//! bound into a vector and one streaming them to a textual output sink.
//! The binary wraps the same operations behind a small CLI.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::core::{fib_sequence, write_series, Fib, SeriesReport};
pub use crate::errors::{FiboError, Result};
pub use crate::io::output::{create_writer, OutputWriter};
