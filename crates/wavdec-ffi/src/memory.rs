//! Linear-memory staging for hosts that need to copy input bytes in.
//!
//! A WebAssembly host cannot pass its own memory to [`crate::decode_wav`]; it
//! allocates a block here, copies the WAV bytes into it, decodes, and frees
//! the block with the same size.

use std::ptr;

/// Allocate `size` zeroed bytes and return a pointer to them.
///
/// The block must be released with [`wav_free`] using the same `size`.
#[no_mangle]
pub extern "C" fn wav_alloc(size: usize) -> *mut u8 {
    let boxed = vec![0u8; size].into_boxed_slice();
    Box::into_raw(boxed).cast::<u8>()
}

/// Free a block previously returned by [`wav_alloc`].
///
/// # Safety
///
/// `ptr` must come from [`wav_alloc`] called with exactly `size`, and must
/// not be used afterwards. Null is a no-op.
#[no_mangle]
pub unsafe extern "C" fn wav_free(ptr: *mut u8, size: usize) {
    if !ptr.is_null() {
        drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, size)) });
    }
}
