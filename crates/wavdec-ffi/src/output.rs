//! The process-wide output region written by [`crate::decode_wav`].
//!
//! A single statically allocated block of `f32` slots, zero-initialized at
//! load time and never freed. Every successful decode overwrites it from
//! offset 0, so its address is stable for the lifetime of the module.

use std::cell::UnsafeCell;

/// Capacity of the output region in interleaved `f32` samples.
pub const OUTPUT_CAPACITY: usize = wavdec_core::DEFAULT_CAPACITY;

pub(crate) struct OutputRegion(UnsafeCell<[f32; OUTPUT_CAPACITY]>);

// SAFETY: callers of the exported API serialize decodes; the region is
// only written through `as_mut_slice`, whose contract forbids overlap.
unsafe impl Sync for OutputRegion {}

pub(crate) static OUTPUT: OutputRegion = OutputRegion(UnsafeCell::new([0.0; OUTPUT_CAPACITY]));

impl OutputRegion {
    /// Fixed address of the first sample.
    pub(crate) fn as_ptr(&self) -> *mut f32 {
        self.0.get().cast()
    }

    /// Mutable view of the whole region.
    ///
    /// # Safety
    ///
    /// No other reference into the region may be live and no other decode
    /// may run for as long as the returned slice is used.
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn as_mut_slice(&self) -> &mut [f32] {
        unsafe { &mut *self.0.get() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_address_is_stable() {
        assert_eq!(OUTPUT.as_ptr(), OUTPUT.as_ptr());
        assert!(!OUTPUT.as_ptr().is_null());
    }

    #[test]
    fn test_region_capacity() {
        assert_eq!(OUTPUT_CAPACITY, 4 * 1024 * 1024);
        assert_eq!(
            std::mem::size_of::<OutputRegion>(),
            OUTPUT_CAPACITY * std::mem::size_of::<f32>()
        );
    }
}
