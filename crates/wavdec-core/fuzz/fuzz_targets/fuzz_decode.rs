//! Fuzz target for in-memory WAV decoding.
//!
//! Feeds arbitrary bytes to `probe` and `decode_into` to find panics in the
//! header handling and capacity check.

#![no_main]

use libfuzzer_sys::fuzz_target;

/// Small on purpose: large declared `data` chunks must hit `TooLarge`.
const FUZZ_CAPACITY: usize = 1 << 16;

fuzz_target!(|data: &[u8]| {
    let probed = wavdec_core::probe(data);

    let mut out = vec![0.0_f32; FUZZ_CAPACITY];
    let decoded = wavdec_core::decode_into(data, &mut out);

    // A buffer that decodes must also probe to the same header.
    if let Ok(format) = decoded {
        assert_eq!(probed.ok(), Some(format));
        assert!(format.required_samples() <= FUZZ_CAPACITY as u64);
    }
});
