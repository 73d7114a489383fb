/// Re-export everything from `log` crate
pub use log::*;

use anyhow::Error;

/// Logs a failed batch and every cause below it, innermost cause last.
pub fn error_details(err: &Error) {
    log::error!("{err}");

    err.chain().skip(1).enumerate().for_each(|(depth, cause)| {
        log::error!("  caused by ({depth}): {cause}");
    });
}

/// Maps the `--quiet`/`--verbose` switches onto a default filter for the logger.
pub fn default_filter(quiet: bool, verbose: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, true) => LevelFilter::Debug,
        (false, false) => LevelFilter::Info,
    }
}
