use std::ffi::CStr;
use std::os::raw::c_char;

use crate::error;

/// Convert a required C string argument into UTF-8 `&str`.
///
/// # Safety
/// `value` must be null or point to a valid NUL-terminated C string.
pub(crate) unsafe fn required_str_arg<'a>(value: *const c_char, name: &str) -> Option<&'a str> {
    if value.is_null() {
        let _ = error::set_invalid_argument(format!("{name} cannot be null"));
        return None;
    }

    let as_cstr = {
        // SAFETY: The caller guarantees `value` points to a valid NUL-terminated C string.
        unsafe { CStr::from_ptr(value) }
    };

    match as_cstr.to_str() {
        Ok(v) => Some(v),
        Err(_) => {
            let _ = error::set_invalid_argument(format!("{name} must be valid UTF-8"));
            None
        }
    }
}

/// Convert an optional byte pointer + length into a slice.
///
/// # Safety
/// If `len > 0`, `data` must be non-null and readable for `len` bytes.
pub(crate) unsafe fn bytes_arg<'a>(data: *const u8, len: usize, name: &str) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if data.is_null() {
        let _ = error::set_invalid_argument(format!("{name} cannot be null when len > 0"));
        return None;
    }

    // SAFETY: Pointer and length are validated above and owned by caller for the call duration.
    Some(unsafe { std::slice::from_raw_parts(data, len) })
}

/// Convert a sample pointer + length into a slice.
///
/// # Safety
/// If `len > 0`, `samples` must be non-null and readable for `len` floats.
pub(crate) unsafe fn samples_arg<'a>(samples: *const f32, len: usize) -> Option<&'a [f32]> {
    if len == 0 {
        return Some(&[]);
    }
    if samples.is_null() {
        let _ = error::set_invalid_argument("samples cannot be null when len > 0");
        return None;
    }

    // SAFETY: Pointer and length are validated above and owned by caller for the call duration.
    Some(unsafe { std::slice::from_raw_parts(samples, len) })
}

/// Convert a writable sample pointer + length into a mutable slice.
///
/// # Safety
/// If `len > 0`, `samples` must be non-null, writable for `len` floats and not aliased.
pub(crate) unsafe fn samples_mut_arg<'a>(samples: *mut f32, len: usize) -> Option<&'a mut [f32]> {
    if len == 0 {
        return Some(&mut []);
    }
    if samples.is_null() {
        let _ = error::set_invalid_argument("samples cannot be null when len > 0");
        return None;
    }

    // SAFETY: Pointer and length are validated above and exclusively lent for the call duration.
    Some(unsafe { std::slice::from_raw_parts_mut(samples, len) })
}

/// Move an owned string out to the caller as a C string.
pub(crate) fn string_out(value: String, out: *mut *mut c_char) -> crate::types::IbrResult {
    if out.is_null() {
        return error::set_invalid_argument("out_text cannot be null");
    }
    let text = match std::ffi::CString::new(value) {
        Ok(text) => text,
        Err(_) => return error::set_invalid_argument("output contains an interior NUL"),
    };

    // SAFETY: `out` was checked for null above; the caller owns the pointee.
    unsafe {
        *out = text.into_raw();
    }
    crate::types::IbrResult::Ok
}
