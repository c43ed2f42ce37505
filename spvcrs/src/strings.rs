use crate::Result;
use std::ffi::{CStr, CString, c_char};

/// Copies a NUL-terminated native string; null becomes the empty string.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub(crate) unsafe fn native_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

pub(crate) fn c_string(value: &str) -> Result<CString> {
    Ok(CString::new(value)?)
}

/// Copies a native `(pointer, count)` array into a `Vec`.
///
/// # Safety
///
/// `ptr` must be null or point to `count` initialized elements.
pub(crate) unsafe fn native_slice<T: Copy>(ptr: *const T, count: usize) -> Vec<T> {
    if ptr.is_null() || count == 0 {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(ptr, count) }.to_vec()
}
