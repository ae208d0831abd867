pub mod syscall;

pub use perf_event_open_sys::{bindings, ioctls};

pub type Attr = bindings::perf_event_attr;

// Dereferences the pointer and offsets by the size of the
// pointee type, then returns the dereferenced value.
//
// The pointer may be unaligned since read buffers are plain bytes.
#[inline]
pub unsafe fn deref_offset<T: Copy>(ptr: &mut *const u8) -> T {
    let val = (*ptr as *const T).read_unaligned();
    *ptr = ptr.add(size_of::<T>());
    val
}
