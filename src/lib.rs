// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
pub mod trace_init;

pub use ffi::*;
pub use roman_core::{
    decode, decode_with, encode, is_canonical, settings, DecodeMode, RomanError, SYMBOLS,
};
