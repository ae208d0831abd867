use std::fs::File;
use std::io::Result;
use std::os::fd::AsRawFd;

use crate::ffi::syscall::{close, ioctl, perf_event_open, read};
use crate::ffi::{bindings as b, ioctls, Attr};

mod stat;

pub use stat::*;

// The calling process (and its new children with `inherit`), any CPU.
const PID: i32 = 0;
const CPU: i32 = -1;

/// One counter file opened by `perf_event_open`.
pub struct Counter {
    pub(crate) perf: File,
}

impl Counter {
    /// Opens a counter for `attr`, joining the group of `leader` if any.
    pub fn open(attr: &Attr, leader: Option<&Counter>) -> Result<Self> {
        let group_fd = leader.map_or(-1, |it| it.perf.as_raw_fd());
        let flags = b::PERF_FLAG_FD_CLOEXEC as u64;
        let perf = perf_event_open(attr, PID, CPU, group_fd, flags)?;

        Ok(Self { perf })
    }

    /// Enabling a group leader enables the whole group.
    pub fn enable(&self) -> Result<()> {
        ioctl(&self.perf, ioctls::ENABLE)?;
        Ok(())
    }

    pub fn disable(&self) -> Result<()> {
        ioctl(&self.perf, ioctls::DISABLE)?;
        Ok(())
    }

    pub fn clear_count(&self) -> Result<()> {
        ioctl(&self.perf, ioctls::RESET)?;
        Ok(())
    }

    /// Reads the raw stat into `buf`, returning the number of bytes read.
    pub fn read_into(&self, buf: &mut [u8; STAT_SIZE]) -> Result<usize> {
        read(&self.perf, buf)
    }

    /// Closes the counter, reporting failures that dropping it would hide.
    pub fn close(self) -> Result<()> {
        close(self.perf)
    }
}
