//! C ABI for chainalign
//!
//! One entry point per alignment call plus the paired release function.
//! The result is handed over as an owned NUL-terminated string holding
//! the flat alignment record; an empty string means "no alignment found".
//! Callers must release every returned pointer through
//! [`chainalign_free`] exactly once and must never pass it memory this
//! library did not return.

use std::ffi::CString;
use std::os::raw::{c_char, c_double, c_int};

use chainalign_core::{AlignParams, SeedParams};

/// Semi-globally align two nucleotide sequences and return the flat
/// alignment record.
///
/// Null pointers, negative lengths or non-positive parameters degrade to
/// the empty record rather than failing.
///
/// # Safety
///
/// `s1` and `s2` must point to readable buffers of at least `s1_len` and
/// `s2_len` bytes. The returned pointer must be released with
/// [`chainalign_free`] and not through any other allocator.
#[no_mangle]
pub unsafe extern "C" fn semi_global_align(
    s1: *const c_char,
    s2: *const c_char,
    s1_len: c_int,
    s2_len: c_int,
    kmer_size: c_int,
    band_width: c_int,
    allowed_length_discrepancy: c_double,
) -> *mut c_char {
    if s1.is_null()
        || s2.is_null()
        || s1_len < 0
        || s2_len < 0
        || kmer_size <= 0
        || band_width <= 0
        || !(allowed_length_discrepancy >= 0.0)
    {
        return into_c_string(String::new());
    }

    let seq1 = std::slice::from_raw_parts(s1 as *const u8, s1_len as usize);
    let seq2 = std::slice::from_raw_parts(s2 as *const u8, s2_len as usize);
    let params = AlignParams {
        seed: SeedParams {
            kmer_size: kmer_size as usize,
            ..Default::default()
        },
        band_width: band_width as usize,
        allowed_length_discrepancy,
        ..Default::default()
    };

    let record = chainalign_core::semi_global_align(seq1, seq2, &params)
        .map(|report| report.to_record())
        .unwrap_or_default();
    into_c_string(record)
}

/// Release a record previously returned by [`semi_global_align`].
///
/// # Safety
///
/// `record` must be a pointer returned by this library that has not been
/// freed before. Passing anything else is undefined behavior. Null is
/// ignored.
#[no_mangle]
pub unsafe extern "C" fn chainalign_free(record: *mut c_char) {
    if record.is_null() {
        return;
    }
    drop(CString::from_raw(record));
}

// Records are digits, letters and separators, so the NUL check never
// fires in practice.
fn into_c_string(record: String) -> *mut c_char {
    CString::new(record).unwrap_or_default().into_raw()
}
