//! Logger setup for the binary.

use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Initialise stderr logging. `verbose` enables debug output from the
/// search engine; otherwise only info and above are shown.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()));
    // Ignore double-init in tests.
    let _ = builder.try_init();
}
