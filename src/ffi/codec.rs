use std::ffi::{c_char, CString};
use std::ptr;

use roman_core::{decode_with, encode, DecodeMode, RomanError};

use super::ffi_guard;

// Status codes shared by encode and decode.
pub const ROMAN_OK: i32 = 0;
pub const ROMAN_ERR_INVALID_INPUT: i32 = 1;
pub const ROMAN_ERR_INVALID_DIGIT: i32 = 2;
pub const ROMAN_ERR_LOOKUP_FAILURE: i32 = 3;
pub const ROMAN_ERR_UNKNOWN_SYMBOL: i32 = 4;
pub const ROMAN_ERR_NON_CANONICAL: i32 = 5;
pub const ROMAN_ERR_ARGUMENT: i32 = -1;

pub(crate) fn status_of(err: &RomanError) -> i32 {
    match err {
        RomanError::InvalidInput { .. } => ROMAN_ERR_INVALID_INPUT,
        RomanError::InvalidDigit { .. } => ROMAN_ERR_INVALID_DIGIT,
        RomanError::LookupFailure { .. } => ROMAN_ERR_LOOKUP_FAILURE,
        RomanError::UnknownSymbol { .. } => ROMAN_ERR_UNKNOWN_SYMBOL,
        RomanError::NonCanonical { .. } => ROMAN_ERR_NON_CANONICAL,
    }
}

fn set_status(out_status: *mut i32, status: i32) {
    if !out_status.is_null() {
        unsafe { *out_status = status };
    }
}

/// Encode `value`. Returns an owned string (free with `roman_engine_free_string`)
/// or null on failure, with the reason written to `out_status` when non-null.
#[no_mangle]
pub extern "C" fn roman_engine_encode(value: i64, out_status: *mut i32) -> *mut c_char {
    match encode(value) {
        Ok(numeral) => match CString::new(numeral) {
            Ok(cs) => {
                set_status(out_status, ROMAN_OK);
                cs.into_raw()
            }
            Err(_) => {
                set_status(out_status, ROMAN_ERR_ARGUMENT);
                ptr::null_mut()
            }
        },
        Err(e) => {
            set_status(out_status, status_of(&e));
            ptr::null_mut()
        }
    }
}

/// Decode a NUL-terminated numeral into `out_value`. Returns a status code;
/// `out_value` is only written on success.
#[no_mangle]
pub extern "C" fn roman_engine_decode(
    numeral: *const c_char,
    strict: bool,
    out_value: *mut u64,
) -> i32 {
    ffi_guard!(ROMAN_ERR_ARGUMENT;
        str: numeral = numeral,
        nonnull: out_value,
    );
    let mode = if strict {
        DecodeMode::Strict
    } else {
        DecodeMode::Permissive
    };
    match decode_with(numeral, mode) {
        Ok(value) => {
            unsafe { *out_value = value };
            ROMAN_OK
        }
        Err(e) => status_of(&e),
    }
}

/// Free a string returned by `roman_engine_encode`. No-op on null.
#[no_mangle]
pub extern "C" fn roman_engine_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}
