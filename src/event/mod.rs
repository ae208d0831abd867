//! Counter catalog: maps counter names to the event the kernel is asked to count.

pub mod hw;
pub mod sw;

use hw::{Hardware, Op, OpResult};
use sw::Software;

use crate::ffi::bindings as b;

/// Event descriptor, the `type` and `config` pair of `perf_event_attr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub ty: u32,
    pub config: u64,
}

impl Descriptor {
    pub fn is_hardware(&self) -> bool {
        self.ty == b::PERF_TYPE_HARDWARE
    }
}

/// Returns the event descriptor for the counter `name`.
///
/// # Panics
///
/// Names come from [`Metric::name`][crate::metrics::Metric::name] only,
/// so an unknown name is a bug and panics.
pub fn descriptor_for(name: &str) -> Descriptor {
    match name {
        "ref_cycle" => Hardware::RefCpuCycle.into(),
        "instruction" => Hardware::Instr.into(),
        "branch" => Hardware::BranchInstr.into(),
        "branch_mispred" => Hardware::BranchMiss.into(),
        "frontend_stall" => Hardware::FrontendStalledCycle.into(),
        "backend_stall" => Hardware::BackendStalledCycle.into(),

        "l3_load" => Hardware::LlCache(Op::Read, OpResult::Access).into(),
        "l3_store" => Hardware::LlCache(Op::Write, OpResult::Access).into(),
        "l3_load_miss" => Hardware::LlCache(Op::Read, OpResult::Miss).into(),
        "l3_store_miss" => Hardware::LlCache(Op::Write, OpResult::Miss).into(),

        "page_fault" => Software::PageFault.into(),

        _ => panic!("bug: name {} does not match any known counter", name),
    }
}
