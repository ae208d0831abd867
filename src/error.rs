use std::io;

use crate::count::STAT_SIZE;

/// Failures a session recovers from by leaving the affected counter at zero.
///
/// These are logged rather than returned, the caller only sees zero values
/// and a lower coverage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("perf_event_open error {} for counter {name}", errno(.source))]
    Open {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("perf counter read() error {} for {name}", errno(.source))]
    Read {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("perf counter short read of {got}/{} bytes for {name}", STAT_SIZE)]
    ShortRead { name: &'static str, got: usize },
}

fn errno(e: &io::Error) -> i32 {
    e.raw_os_error().unwrap_or_default()
}
