//! imgbridge-ffi: C-ABI exports for native compositing hosts.

mod args;
mod codec;
mod error;
mod frame;
mod types;

use std::panic::AssertUnwindSafe;

pub use codec::{ibr_base64_decode, ibr_base64_encode, ibr_bytes_free};
pub use frame::{ibr_decode_frame, ibr_encode_frame, ibr_string_free};
pub use types::{
    IbrBytes, IbrResult, IBR_ERR_INTERNAL, IBR_ERR_INVALID_ARGUMENT, IBR_ERR_MALFORMED_PAYLOAD,
    IBR_ERR_SIZE_MISMATCH, IBR_OK,
};

fn ffi_boundary<T>(on_panic: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            error::set_panic_error();
            on_panic
        }
    }
}

#[no_mangle]
pub extern "C" fn ibr_init() -> IbrResult {
    ffi_boundary(IbrResult::Internal, || {
        error::clear_error_state();
        IbrResult::Ok
    })
}

#[no_mangle]
pub extern "C" fn ibr_cleanup() {
    ffi_boundary((), || {
        error::clear_error_state();
    });
}

/// Message describing the last failure on this thread; empty after success.
#[no_mangle]
pub extern "C" fn ibr_last_error() -> *const std::os::raw::c_char {
    ffi_boundary(std::ptr::null(), error::last_error_ptr)
}
