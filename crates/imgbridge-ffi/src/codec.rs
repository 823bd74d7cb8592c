use std::os::raw::c_char;

use crate::args;
use crate::error;
use crate::types::{IbrBytes, IbrResult};

/// Encode raw bytes as padded base64.
///
/// # Safety
/// If `len > 0`, `data` must be readable for `len` bytes. `out_text` must be a
/// valid pointer to writable storage for one `char*`.
#[no_mangle]
pub unsafe extern "C" fn ibr_base64_encode(
    data: *const u8,
    len: usize,
    out_text: *mut *mut c_char,
) -> IbrResult {
    crate::ffi_boundary(IbrResult::Internal, || {
        error::clear_error_state();

        let data = {
            // SAFETY: We validate null in helper; length is provided by the caller.
            match unsafe { args::bytes_arg(data, len, "data") } {
                Some(v) => v,
                None => return IbrResult::InvalidArgument,
            }
        };

        args::string_out(imgbridge_codec::encode(data), out_text)
    })
}

/// Decode base64 text, skipping characters outside the alphabet.
///
/// Any buffer already held by `out_bytes` is released first.
///
/// # Safety
/// `text` must be a valid NUL-terminated C string. `out_bytes` must point to an
/// `IbrBytes` that is zeroed or was populated by this library.
#[no_mangle]
pub unsafe extern "C" fn ibr_base64_decode(
    text: *const c_char,
    out_bytes: *mut IbrBytes,
) -> IbrResult {
    crate::ffi_boundary(IbrResult::Internal, || {
        error::clear_error_state();

        let text = {
            // SAFETY: We validate null and UTF-8 in helper.
            match unsafe { args::required_str_arg(text, "text") } {
                Some(v) => v,
                None => return IbrResult::InvalidArgument,
            }
        };
        if out_bytes.is_null() {
            return error::set_invalid_argument("out_bytes cannot be null");
        }

        let bytes_ref = {
            // SAFETY: Pointer validity is guaranteed by the caller.
            unsafe { &mut *out_bytes }
        };
        release(bytes_ref);

        let boxed: Box<[u8]> = imgbridge_codec::decode(text).into_boxed_slice();
        let len = boxed.len();
        bytes_ref.data = if len == 0 {
            std::ptr::null_mut()
        } else {
            Box::into_raw(boxed) as *mut u8
        };
        bytes_ref.len = len;

        IbrResult::Ok
    })
}

/// Free bytes populated by `ibr_base64_decode`.
///
/// # Safety
/// `bytes` must be null or point to an `IbrBytes` that is zeroed or was
/// populated by this library.
#[no_mangle]
pub unsafe extern "C" fn ibr_bytes_free(bytes: *mut IbrBytes) {
    crate::ffi_boundary((), || {
        if bytes.is_null() {
            return;
        }

        let bytes_ref = {
            // SAFETY: Pointer validity is guaranteed by the caller.
            unsafe { &mut *bytes }
        };
        release(bytes_ref);
    });
}

fn release(bytes: &mut IbrBytes) {
    if !bytes.data.is_null() {
        let slice_ptr = std::ptr::slice_from_raw_parts_mut(bytes.data, bytes.len);
        // SAFETY: `data` was allocated as `Box<[u8]>` by `ibr_base64_decode`.
        unsafe {
            drop(Box::from_raw(slice_ptr));
        }
    }
    *bytes = IbrBytes::default();
}
