use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::event::{descriptor_for, Descriptor};

/// Counter values of one measurement.
///
/// Values are floating point because they are extrapolated from multiplexed
/// counters. The struct is packed into individual fields of mixed width so it
/// fits in one cache line. All values are sums rather than ratios, so bundles
/// from different windows can be added and subtracted.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerfCounters {
    pub ref_cycle: f64,
    pub instruction: f64,
    pub branch: f32,
    pub branch_mispred: f32,
    /// Cycles.
    pub frontend_stall: f32,
    /// Cycles.
    pub backend_stall: f32,
    pub l3_load: f32,
    pub l3_store: f32,
    pub l3_load_miss: f32,
    pub l3_store_miss: f32,
    pub page_fault: f32,
}

impl PerfCounters {
    pub const NUM: usize = 11;

    /// Iterates over `(metric, value)` in [`Metric::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |it| (it, it.get(self)))
    }

    /// Iterates over `(metric, value, value in other)` in [`Metric::ALL`] order.
    pub fn zip<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = (Metric, f64, f64)> + 'a {
        Metric::ALL
            .into_iter()
            .map(move |it| (it, it.get(self), it.get(other)))
    }
}

/// Names one field of [`PerfCounters`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    RefCycle,
    Instruction,
    Branch,
    BranchMispred,
    FrontendStall,
    BackendStall,
    L3Load,
    L3Store,
    L3LoadMiss,
    L3StoreMiss,
    PageFault,
}

macro_rules! fields {
    ($($metric:ident => $field:ident,)+) => {
        impl Metric {
            /// All metrics in field order, which is also the order counters are opened in.
            ///
            /// The first one leads the counter group and must be a hardware event.
            pub const ALL: [Metric; PerfCounters::NUM] = [$(Metric::$metric,)+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Metric::$metric => stringify!($field),)+
                }
            }

            pub fn get(self, counters: &PerfCounters) -> f64 {
                match self {
                    $(Metric::$metric => counters.$field as f64,)+
                }
            }

            /// Overwrites the field, narrowing `val` to the field type.
            pub fn set(self, counters: &mut PerfCounters, val: f64) {
                match self {
                    $(Metric::$metric => counters.$field = val as _,)+
                }
            }
        }
    };
}

fields! {
    RefCycle => ref_cycle,
    Instruction => instruction,
    Branch => branch,
    BranchMispred => branch_mispred,
    FrontendStall => frontend_stall,
    BackendStall => backend_stall,
    L3Load => l3_load,
    L3Store => l3_store,
    L3LoadMiss => l3_load_miss,
    L3StoreMiss => l3_store_miss,
    // Must stay last, only the first entry is special.
    PageFault => page_fault,
}

impl Metric {
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|it| it.name() == name)
    }

    /// Position in [`Metric::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn descriptor(self) -> Descriptor {
        descriptor_for(self.name())
    }
}

impl AddAssign for PerfCounters {
    fn add_assign(&mut self, rhs: Self) {
        for it in Metric::ALL {
            it.set(self, it.get(self) + it.get(&rhs));
        }
    }
}

impl SubAssign for PerfCounters {
    fn sub_assign(&mut self, rhs: Self) {
        for it in Metric::ALL {
            it.set(self, it.get(self) - it.get(&rhs));
        }
    }
}

impl Add for PerfCounters {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for PerfCounters {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}
