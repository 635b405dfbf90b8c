//! Output handling for generated series.

pub mod output;

pub use output::{create_writer, JsonWriter, OutputWriter, StreamWriter, TerminalWriter};
