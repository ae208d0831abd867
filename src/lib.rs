//! Hardware performance counters for a code region, based on the `perf_event_open`
//! system call.
//!
//! A [`Pmu`] opens a fixed set of counters (reference cycles, instructions,
//! branches, branch mispredictions, frontend/backend stalls, last level cache
//! loads/stores and their misses, page faults) as one group. Physical counters
//! are scarce, so the kernel multiplexes them. [`Pmu::stop`] extrapolates every
//! value from the fraction of time its counter was actually scheduled and
//! returns the minimum such fraction, callers should discard measurements with
//! a low coverage.
//!
//! ## Example
//!
//! ```rust
//! use hw_counters::{PerfCounters, Pmu};
//!
//! let mut pmu = Pmu::new();
//! let mut counters = PerfCounters::default();
//!
//! let started = pmu.start();
//! fn fib(n: usize) -> usize {
//!     match n {
//!         0 => 0,
//!         1 => 1,
//!         n => fib(n - 1) + fib(n - 2),
//!     }
//! }
//! std::hint::black_box(fib(20));
//!
//! if started && pmu.stop(&mut counters) != 0.0 {
//!     let instrs = counters.instruction;
//!     println!("{} instructions retired", instrs);
//! }
//! ```
//!
//! Counting is optional: on kernels without counter support the program
//! continues, `start` returns `false` and all values read as zero.

mod bits;
pub mod config;
mod count;
mod error;
mod event;
mod ffi;
pub mod metrics;
pub mod pmu;

pub use config::Opts;
pub use metrics::{Metric, PerfCounters};
pub use pmu::{Device, Pmu};
