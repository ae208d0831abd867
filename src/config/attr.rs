use super::Opts;
use crate::event::Descriptor;
use crate::ffi::{bindings as b, Attr};

pub(crate) fn from(descriptor: Descriptor, opts: &Opts, leader: bool) -> Attr {
    let mut attr = Attr {
        size: size_of::<Attr>() as _,
        ..Default::default()
    };

    attr.type_ = descriptor.ty;
    attr.config = descriptor.config;

    // More counters are requested than the PMU may have, in which case they are
    // multiplexed. The times are needed to extrapolate. No `PERF_FORMAT_GROUP`,
    // each counter is read with its own times.
    attr.read_format =
        (b::PERF_FORMAT_TOTAL_TIME_ENABLED | b::PERF_FORMAT_TOTAL_TIME_RUNNING) as _;

    macro_rules! then {
        ($then:tt) => {
            attr.$then(1)
        };
    }
    if opts.inherit {
        then!(set_inherit);
    }
    if opts.exclude.kernel {
        then!(set_exclude_kernel);
    }
    if opts.exclude.hv {
        then!(set_exclude_hv);
    }

    // Siblings are gated by the leader, so only the leader starts disabled.
    if leader {
        then!(set_disabled);
    }

    attr
}
