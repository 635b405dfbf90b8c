//! CLI command implementations for fibo operations.
//!
//! There is a single command surface: generating the series below a bound.
//! The handler is driven by a plain config struct built from parsed CLI
//! arguments.

pub mod series;

pub use series::{handle_series, SeriesConfig};
