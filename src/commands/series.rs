//! Series command: generate the Fibonacci values below a bound and render
//! them in the requested format.

use crate::cli::OutputFormat;
use crate::core::SeriesReport;
use crate::io::output::create_writer;
use anyhow::Result;
use std::path::PathBuf;

pub struct SeriesConfig {
    pub bound: u64,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub stream: bool,
    pub verbosity: u8,
}

pub fn handle_series(config: SeriesConfig) -> Result<()> {
    let report = SeriesReport::new(config.bound);
    log::debug!(
        "generated {} values below {}",
        report.values.len(),
        report.bound
    );

    let mut writer = create_writer(config.format, config.output, config.stream)?;
    writer.write_report(&report)?;
    Ok(())
}
