use super::Descriptor;
use crate::ffi::bindings as b;

/// Cache operation is encoded at this bit offset of the cache event config.
pub const OP_SHIFT: u64 = 8;
/// Cache operation result is encoded at this bit offset of the cache event config.
pub const RESULT_SHIFT: u64 = 16;

#[derive(Clone, Copy, Debug)]
pub enum Hardware {
    RefCpuCycle,
    Instr,

    BranchInstr,
    BranchMiss,

    FrontendStalledCycle,
    BackendStalledCycle,

    /// Last level cache.
    LlCache(Op, OpResult),
}

#[derive(Clone, Copy, Debug)]
pub enum Op {
    Read,
    Write,
}

#[derive(Clone, Copy, Debug)]
pub enum OpResult {
    Access,
    Miss,
}

impl From<Hardware> for Descriptor {
    fn from(value: Hardware) -> Self {
        let config = match value {
            Hardware::RefCpuCycle => b::PERF_COUNT_HW_REF_CPU_CYCLES,
            Hardware::Instr => b::PERF_COUNT_HW_INSTRUCTIONS,

            Hardware::BranchInstr => b::PERF_COUNT_HW_BRANCH_INSTRUCTIONS,
            Hardware::BranchMiss => b::PERF_COUNT_HW_BRANCH_MISSES,

            Hardware::FrontendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND,
            Hardware::BackendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_BACKEND,

            Hardware::LlCache(op, result) => {
                let id = b::PERF_COUNT_HW_CACHE_LL as u64;
                let op = match op {
                    Op::Read => b::PERF_COUNT_HW_CACHE_OP_READ,
                    Op::Write => b::PERF_COUNT_HW_CACHE_OP_WRITE,
                } as u64;
                let op_result = match result {
                    OpResult::Access => b::PERF_COUNT_HW_CACHE_RESULT_ACCESS,
                    OpResult::Miss => b::PERF_COUNT_HW_CACHE_RESULT_MISS,
                } as u64;

                return Descriptor {
                    ty: b::PERF_TYPE_HW_CACHE,
                    config: id | (op << OP_SHIFT) | (op_result << RESULT_SHIFT),
                };
            }
        };

        Descriptor {
            ty: b::PERF_TYPE_HARDWARE,
            config: config as _,
        }
    }
}
