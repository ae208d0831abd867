use crate::ffi::deref_offset;

/// Size of a counter read with `TOTAL_TIME_ENABLED | TOTAL_TIME_RUNNING`.
pub const STAT_SIZE: usize = 3 * size_of::<u64>();

/// Raw counter value with the times it was enabled and actually counting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stat {
    pub count: u64,
    pub time_enabled: u64,
    pub time_running: u64,
}

impl Stat {
    // https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L344
    // struct read_format {
    //     u64 value;
    //     u64 time_enabled;
    //     u64 time_running;
    // };
    pub fn from_bytes(buf: &[u8; STAT_SIZE]) -> Self {
        let mut ptr = buf.as_ptr();
        // `buf` holds exactly three `u64`s.
        unsafe {
            let count = deref_offset(&mut ptr);
            let time_enabled = deref_offset(&mut ptr);
            let time_running = deref_offset(&mut ptr);
            Self {
                count,
                time_enabled,
                time_running,
            }
        }
    }

    /// Fraction of the enabled time the counter was scheduled on the PMU.
    ///
    /// Returns `None` if the counter never ran, in which case nothing can be extrapolated.
    ///
    /// # Panics
    ///
    /// The kernel guarantees `0 < time_running <= time_enabled` for a counter that ran,
    /// anything else is a bug and panics.
    pub fn coverage(&self) -> Option<f64> {
        assert!(
            self.time_running <= self.time_enabled,
            "bug: time running {} exceeds time enabled {}",
            self.time_running,
            self.time_enabled
        );
        if self.time_running == 0 {
            return None;
        }

        let fraction = self.time_running as f64 / self.time_enabled as f64;
        assert!(
            0.0 < fraction && fraction <= 1.0,
            "bug: invalid coverage {}",
            fraction
        );
        Some(fraction)
    }

    /// Estimates the count over the whole enabled time.
    ///
    /// This assumes events happened at a steady rate, counts from counters
    /// with low coverage are noisy.
    pub fn extrapolate(&self) -> Option<(f64, f64)> {
        let fraction = self.coverage()?;
        Some((self.count as f64 / fraction, fraction))
    }
}
