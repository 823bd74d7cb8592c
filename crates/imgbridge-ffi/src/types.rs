#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IbrResult {
    Ok = 0,
    InvalidArgument = 1,
    MalformedPayload = 2,
    SizeMismatch = 3,
    Internal = 99,
}

#[allow(dead_code)]
pub const IBR_OK: IbrResult = IbrResult::Ok;
#[allow(dead_code)]
pub const IBR_ERR_INVALID_ARGUMENT: IbrResult = IbrResult::InvalidArgument;
#[allow(dead_code)]
pub const IBR_ERR_MALFORMED_PAYLOAD: IbrResult = IbrResult::MalformedPayload;
#[allow(dead_code)]
pub const IBR_ERR_SIZE_MISMATCH: IbrResult = IbrResult::SizeMismatch;
#[allow(dead_code)]
pub const IBR_ERR_INTERNAL: IbrResult = IbrResult::Internal;

/// Byte buffer owned by this library; release with `ibr_bytes_free`.
#[repr(C)]
#[derive(Debug)]
pub struct IbrBytes {
    pub data: *mut u8,
    pub len: usize,
}

impl Default for IbrBytes {
    fn default() -> Self {
        Self {
            data: std::ptr::null_mut(),
            len: 0,
        }
    }
}
