use super::Descriptor;
use crate::ffi::bindings as b;

#[derive(Clone, Copy, Debug)]
pub enum Software {
    PageFault,
}

impl From<Software> for Descriptor {
    fn from(value: Software) -> Self {
        let config = match value {
            Software::PageFault => b::PERF_COUNT_SW_PAGE_FAULTS,
        };

        Descriptor {
            ty: b::PERF_TYPE_SOFTWARE,
            config: config as _,
        }
    }
}
