use std::fs;
use std::io::Result;

use crate::config::Opts;
pub use crate::count::STAT_SIZE;
use crate::count::Counter;
/// Kernel counter attributes, `perf_event_attr`.
pub use crate::ffi::Attr;

/// Operations a [`Pmu`][super::Pmu] performs on counters.
///
/// [`Kernel`] is the one used by [`Pmu::new`][super::Pmu::new].
///
/// # Examples
///
/// ```rust
/// use std::io::{ErrorKind, Result};
///
/// use hw_counters::pmu::{Attr, Device, STAT_SIZE};
/// use hw_counters::{Opts, PerfCounters, Pmu};
///
/// // Behaves like a kernel without counter support.
/// struct Unsupported;
///
/// impl Device for Unsupported {
///     type Counter = ();
///
///     fn probe(&self, _: &Opts) -> bool {
///         false
///     }
///
///     fn open(&mut self, _: &Attr, _: Option<&()>) -> Result<()> {
///         Err(ErrorKind::Unsupported.into())
///     }
///
///     fn reset(&mut self, _: &()) -> Result<()> {
///         Ok(())
///     }
///
///     fn enable(&mut self, _: &()) -> Result<()> {
///         Ok(())
///     }
///
///     fn disable(&mut self, _: &()) -> Result<()> {
///         Ok(())
///     }
///
///     fn read(&mut self, _: &(), _: &mut [u8; STAT_SIZE]) -> Result<usize> {
///         Ok(0)
///     }
///
///     fn close(&mut self, _: ()) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let mut pmu = Pmu::with_device(Unsupported, Opts::default());
/// assert!(!pmu.start());
/// assert_eq!(pmu.stop(&mut PerfCounters::default()), 0.0);
/// ```
pub trait Device {
    type Counter;

    /// Returns whether performance counters are available at all.
    fn probe(&self, opts: &Opts) -> bool;

    /// Opens a counter, joining the group of `leader` if any.
    fn open(&mut self, attr: &Attr, leader: Option<&Self::Counter>) -> Result<Self::Counter>;

    fn reset(&mut self, counter: &Self::Counter) -> Result<()>;

    fn enable(&mut self, counter: &Self::Counter) -> Result<()>;

    fn disable(&mut self, counter: &Self::Counter) -> Result<()>;

    /// Reads the raw stat of `counter`, returning the number of bytes read.
    fn read(&mut self, counter: &Self::Counter, buf: &mut [u8; STAT_SIZE]) -> Result<usize>;

    fn close(&mut self, counter: Self::Counter) -> Result<()>;
}

/// Counters of the running kernel, via `perf_event_open`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kernel;

impl Device for Kernel {
    type Counter = Counter;

    // This is the documented way.
    fn probe(&self, opts: &Opts) -> bool {
        fs::metadata(&opts.probe_path).is_ok()
    }

    fn open(&mut self, attr: &Attr, leader: Option<&Counter>) -> Result<Counter> {
        Counter::open(attr, leader)
    }

    fn reset(&mut self, counter: &Counter) -> Result<()> {
        counter.clear_count()
    }

    fn enable(&mut self, counter: &Counter) -> Result<()> {
        counter.enable()
    }

    fn disable(&mut self, counter: &Counter) -> Result<()> {
        counter.disable()
    }

    fn read(&mut self, counter: &Counter, buf: &mut [u8; STAT_SIZE]) -> Result<usize> {
        counter.read_into(buf)
    }

    fn close(&mut self, counter: Counter) -> Result<()> {
        counter.close()
    }
}
