//! Counter session: opens the counter group and reads extrapolated values.

use std::io::ErrorKind;

use arrayvec::ArrayVec;
use log::{debug, warn};

use crate::bits::BitSet64;
use crate::config::attr::from;
use crate::config::Opts;
use crate::count::Stat;
use crate::error::Error;
use crate::metrics::{Metric, PerfCounters};

mod device;

pub use device::*;

/// Holds the counters required for reading [`PerfCounters`]. Expensive to create.
///
/// All counters are opened as one group, so they are enabled and disabled
/// at the same instant. If the PMU has fewer counters than requested, the
/// kernel multiplexes them and [`stop`][Self::stop] extrapolates each value
/// from the fraction of time it was actually counting.
///
/// Counters that cannot be opened on this CPU or kernel read as zero.
///
/// # Examples
///
/// ```rust
/// use hw_counters::{PerfCounters, Pmu};
///
/// let mut pmu = Pmu::new();
/// if pmu.start() {
///     std::hint::black_box((0..1000u64).sum::<u64>());
///
///     let mut counters = PerfCounters::default();
///     let coverage = pmu.stop(&mut counters);
///     // Discard measurements taken under heavy multiplexing.
///     if coverage > 0.5 {
///         for (metric, val) in counters.iter() {
///             println!("{:<20}: {:.3E}", metric.name(), val);
///         }
///     }
/// }
/// ```
pub struct Pmu<D: Device = Kernel> {
    device: D,
    // Which counters are available, indexed by `Metric::index`.
    valid: BitSet64,
    // Only the open counters, in `Metric::ALL` order. The first is the group leader.
    counters: ArrayVec<D::Counter, { PerfCounters::NUM }>,
}

impl Pmu {
    /// Opens counters of the calling process with default [`Opts`].
    pub fn new() -> Self {
        Self::with_device(Kernel, Opts::default())
    }
}

impl Default for Pmu {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Device> Pmu<D> {
    pub fn with_device(mut device: D, opts: Opts) -> Self {
        let mut valid = BitSet64::new();
        let mut counters: ArrayVec<D::Counter, { PerfCounters::NUM }> = ArrayVec::new();

        if !device.probe(&opts) {
            warn!(
                "This Linux does not support perf counters. The program will \
                 continue, but counters will return zero."
            );
            return Self {
                device,
                valid,
                counters,
            };
        }

        for metric in Metric::ALL {
            let name = metric.name();
            // Counters join the group of the first one opened successfully.
            let leader = counters.first();
            let attr = from(metric.descriptor(), &opts, leader.is_none());

            match device.open(&attr, leader) {
                Ok(counter) => {
                    // Zero to make overflow less likely.
                    if let Err(e) = device.reset(&counter) {
                        warn!("perf counter reset error for {}: {}", name, e);
                    }
                    debug!("opened perf counter {}", name);

                    valid.set(metric.index());
                    counters.push(counter);
                }
                Err(source) => warn!("{}", Error::Open { name, source }),
            }
        }

        assert_eq!(
            counters.len(),
            valid.count(),
            "bug: open counters do not match the valid set"
        );
        // Adding a hardware event to a group led by a software event is slow.
        let first = Metric::ALL[0];
        assert!(
            first.descriptor().is_hardware(),
            "bug: first counter {} is not a hardware event",
            first.name()
        );

        Self {
            device,
            valid,
            counters,
        }
    }

    /// Starts all counters.
    ///
    /// Returns `false` if counters are unavailable. Each successful call must be
    /// followed by one [`stop`][Self::stop] before starting again.
    pub fn start(&mut self) -> bool {
        let Some(leader) = self.counters.first() else {
            return false;
        };

        if let Err(e) = self.device.enable(leader) {
            panic!("bug: failed to enable perf counter group: {}", e);
        }
        true
    }

    /// Stops all counters and overwrites `counters` with the values extrapolated
    /// since [`start`][Self::start].
    ///
    /// Returns the minimum coverage of any counter, i.e. the fraction of the time
    /// between start and stop that the counter was actually counting. Returns 0.0
    /// and leaves `counters` untouched if counters are unavailable.
    pub fn stop(&mut self, counters: &mut PerfCounters) -> f64 {
        let Some(leader) = self.counters.first() else {
            return 0.0;
        };

        // Stop all first so that they are measured over the same interval.
        if let Err(e) = self.device.disable(leader) {
            warn!("perf counter disable error: {}", e);
        }

        *counters = PerfCounters::default();

        let mut min_coverage: f64 = 1.0;
        // Same order they were opened in.
        let valid = self.valid;
        let active = Metric::ALL.into_iter().filter(|it| valid.get(it.index()));
        for (metric, counter) in active.zip(&self.counters) {
            let stat = match read_stat(&mut self.device, counter, metric.name()) {
                Ok(stat) => stat,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };

            match stat.extrapolate() {
                Some((val, coverage)) => {
                    min_coverage = min_coverage.min(coverage);
                    metric.set(counters, val);
                }
                None => debug!("perf counter {} was never scheduled", metric.name()),
            }
        }

        debug!("perf counters stopped with min coverage {}", min_coverage);
        min_coverage
    }
}

fn read_stat<D>(device: &mut D, counter: &D::Counter, name: &'static str) -> Result<Stat, Error>
where
    D: Device,
{
    let mut buf = [0; STAT_SIZE];
    loop {
        match device.read(counter, &mut buf) {
            Ok(STAT_SIZE) => return Ok(Stat::from_bytes(&buf)),
            Ok(got) => return Err(Error::ShortRead { name, got }),
            // Transient, the kernel is still updating the counter.
            Err(e) if e.kind() == ErrorKind::WouldBlock => continue,
            Err(source) => return Err(Error::Read { name, source }),
        }
    }
}

impl<D: Device> Drop for Pmu<D> {
    fn drop(&mut self) {
        for counter in self.counters.drain(..) {
            if let Err(e) = self.device.close(counter) {
                panic!("bug: failed to close perf counter: {}", e);
            }
        }
    }
}
