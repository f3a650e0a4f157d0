//! OpenImageIO test-package smoke binary.
//!
//! Prints the library version and the supported-format list queried from the
//! global attribute registry, then exits 0. Takes no arguments; a broken
//! OpenImageIO build fails at compile or link time, which is the check this
//! binary exists to provide. Diagnostics go to stderr under `RUST_LOG`.

mod report;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use report::SmokeReport;

fn main() -> Result<()> {
    init_tracing();

    let report = SmokeReport::collect()?;
    print!("{report}");

    Ok(())
}

fn init_tracing() {
    // Stdout carries the report; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
