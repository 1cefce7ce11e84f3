use super::*;
use std::ffi::{CStr, CString};
use std::ptr;

fn encode_to_string(value: i64) -> (i32, Option<String>) {
    let mut status = i32::MIN;
    let raw = roman_engine_encode(value, &mut status);
    if raw.is_null() {
        return (status, None);
    }
    let s = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_string();
    roman_engine_free_string(raw);
    (status, Some(s))
}

fn decode_status(numeral: &str, strict: bool) -> (i32, u64) {
    let c = CString::new(numeral).unwrap();
    let mut value = u64::MAX;
    let status = roman_engine_decode(c.as_ptr(), strict, &mut value);
    (status, value)
}

#[test]
fn test_ffi_version() {
    let v = unsafe { CStr::from_ptr(roman_engine_version()) };
    assert_eq!(v.to_str().unwrap(), "0.1.0");
}

#[test]
fn test_ffi_encode() {
    assert_eq!(encode_to_string(1990), (ROMAN_OK, Some("MCMXC".to_string())));
    assert_eq!(encode_to_string(0), (ROMAN_OK, Some(String::new())));
    assert_eq!(encode_to_string(-1), (ROMAN_ERR_INVALID_INPUT, None));
    assert_eq!(encode_to_string(4000), (ROMAN_ERR_LOOKUP_FAILURE, None));
}

#[test]
fn test_ffi_encode_null_status() {
    let raw = roman_engine_encode(7, ptr::null_mut());
    assert!(!raw.is_null());
    roman_engine_free_string(raw);
    assert!(roman_engine_encode(-7, ptr::null_mut()).is_null());
}

#[test]
fn test_ffi_decode() {
    assert_eq!(decode_status("MCMLIV", false), (ROMAN_OK, 1954));
    assert_eq!(decode_status("", false), (ROMAN_OK, 0));
    assert_eq!(decode_status("IIII", false), (ROMAN_OK, 4));
    // Failures leave out_value untouched.
    assert_eq!(decode_status("IIII", true), (ROMAN_ERR_NON_CANONICAL, u64::MAX));
    assert_eq!(decode_status("IV9", false), (ROMAN_ERR_UNKNOWN_SYMBOL, u64::MAX));
}

#[test]
fn test_ffi_decode_null_args() {
    let mut value = 0u64;
    assert_eq!(
        roman_engine_decode(ptr::null(), false, &mut value),
        ROMAN_ERR_ARGUMENT
    );
    let c = CString::new("X").unwrap();
    assert_eq!(
        roman_engine_decode(c.as_ptr(), false, ptr::null_mut()),
        ROMAN_ERR_ARGUMENT
    );
}

#[test]
fn test_ffi_free_null_is_noop() {
    roman_engine_free_string(ptr::null_mut());
}

#[test]
fn test_status_codes_distinct() {
    let codes = [
        ROMAN_OK,
        ROMAN_ERR_INVALID_INPUT,
        ROMAN_ERR_INVALID_DIGIT,
        ROMAN_ERR_LOOKUP_FAILURE,
        ROMAN_ERR_UNKNOWN_SYMBOL,
        ROMAN_ERR_NON_CANONICAL,
        ROMAN_ERR_ARGUMENT,
    ];
    for (i, a) in codes.iter().enumerate() {
        assert!(codes[i + 1..].iter().all(|b| a != b));
    }
}
