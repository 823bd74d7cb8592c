use std::os::raw::c_char;

use imgbridge_frame::{encode_frame, try_decode_frame, PixelBuffer};

use crate::args;
use crate::error;
use crate::types::IbrResult;

/// Encode a planar f32 frame as a `<w>,<h>,<c>|<base64>` payload.
///
/// On success `*out_text` receives a NUL-terminated string to be released with
/// [`ibr_string_free`].
///
/// # Safety
/// If `len > 0`, `samples` must be readable for `len` floats. `out_text` must
/// be a valid pointer to writable storage for one `char*`.
#[no_mangle]
pub unsafe extern "C" fn ibr_encode_frame(
    samples: *const f32,
    len: usize,
    width: usize,
    height: usize,
    channels: usize,
    out_text: *mut *mut c_char,
) -> IbrResult {
    crate::ffi_boundary(IbrResult::Internal, || {
        error::clear_error_state();

        let samples = {
            // SAFETY: We validate null in helper; length is provided by the caller.
            match unsafe { args::samples_arg(samples, len) } {
                Some(v) => v,
                None => return IbrResult::InvalidArgument,
            }
        };

        let buffer = match PixelBuffer::from_planar(width, height, channels, samples.to_vec()) {
            Ok(buffer) => buffer,
            Err(err) => return error::map_frame_error(&err),
        };

        args::string_out(encode_frame(&buffer), out_text)
    })
}

/// Decode a payload into a caller-owned planar f32 frame.
///
/// The copy is clamped to the smaller extent on each axis; samples outside the
/// decoded region keep their values. Returns `MalformedPayload` (leaving the
/// frame untouched) when the payload has no separator, a bad header or no data.
///
/// # Safety
/// `payload` must be a valid NUL-terminated C string. If `len > 0`, `samples`
/// must be writable for `len` floats and not aliased during the call.
#[no_mangle]
pub unsafe extern "C" fn ibr_decode_frame(
    payload: *const c_char,
    samples: *mut f32,
    len: usize,
    width: usize,
    height: usize,
    channels: usize,
) -> IbrResult {
    crate::ffi_boundary(IbrResult::Internal, || {
        error::clear_error_state();

        let payload = {
            // SAFETY: We validate null and UTF-8 in helper.
            match unsafe { args::required_str_arg(payload, "payload") } {
                Some(v) => v,
                None => return IbrResult::InvalidArgument,
            }
        };
        let samples = {
            // SAFETY: We validate null in helper; length is provided by the caller.
            match unsafe { args::samples_mut_arg(samples, len) } {
                Some(v) => v,
                None => return IbrResult::InvalidArgument,
            }
        };

        let mut target =
            match PixelBuffer::from_planar(width, height, channels, samples.to_vec()) {
                Ok(target) => target,
                Err(err) => return error::map_frame_error(&err),
            };

        match try_decode_frame(payload, &mut target) {
            Ok(_) => {
                samples.copy_from_slice(target.samples());
                IbrResult::Ok
            }
            Err(err) => error::map_frame_error(&err),
        }
    })
}

/// Free a string returned by this library.
///
/// # Safety
/// `text` must be null or a pointer returned by `ibr_encode_frame` or
/// `ibr_base64_encode` that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn ibr_string_free(text: *mut c_char) {
    crate::ffi_boundary((), || {
        if text.is_null() {
            return;
        }

        // SAFETY: `text` was produced by `CString::into_raw` in this library.
        unsafe {
            drop(std::ffi::CString::from_raw(text));
        }
    });
}
