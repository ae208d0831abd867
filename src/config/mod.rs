use std::path::PathBuf;

pub(crate) mod attr;

/// Kernel config entry whose presence means `perf_event_open` is available.
pub const PARANOID_PATH: &str = "/proc/sys/kernel/perf_event_paranoid";

/// Counter session options.
///
/// The defaults are what [`Pmu::new`][crate::Pmu::new] uses.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Path checked for existence before opening any counter.
    pub probe_path: PathBuf,

    /// Exclude events with privilege levels.
    ///
    /// Excluding the kernel is required when `perf_event_paranoid` is 1 or higher.
    pub exclude: Priv,

    /// Count events of child tasks created during the measurement.
    ///
    /// This applies only to new children, not to any existing children at the time
    /// the counters are created.
    pub inherit: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            probe_path: PathBuf::from(PARANOID_PATH),
            exclude: Priv {
                kernel: true,
                hv: true,
            },
            inherit: true,
        }
    }
}

/// Privilege levels.
#[derive(Clone, Debug, Default)]
pub struct Priv {
    /// Kernel space.
    pub kernel: bool,

    /// Hypervisor.
    pub hv: bool,
}
