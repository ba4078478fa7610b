use std::ffi::CString;
use std::os::raw::c_char;

/// Envelope handed across the C boundary. `data` carries a JSON payload on
/// success, `error` a message on failure; the other pointer is null.
/// Release with `free_api_result`.
#[repr(C)]
pub struct ApiResult {
    pub success: u8,
    pub data: *mut c_char,
    pub error: *mut c_char,
}

/// Interior NULs cannot cross the boundary, so such text is replaced by `fallback`.
fn into_c_string(text: String, fallback: &str) -> *mut c_char {
    CString::new(text)
        .or_else(|_| CString::new(fallback))
        .unwrap_or_default()
        .into_raw()
}

impl ApiResult {
    pub fn success(data: String) -> Self {
        Self {
            success: 1,
            data: into_c_string(data, "Data contains invalid characters"),
            error: std::ptr::null_mut(),
        }
    }

    pub fn error(error: String) -> Self {
        Self {
            success: 0,
            data: std::ptr::null_mut(),
            error: into_c_string(error, "Error message contains invalid characters"),
        }
    }

    pub fn from_result(result: Result<String, String>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::error(error),
        }
    }

    pub fn into_raw(self) -> *mut ApiResult {
        Box::into_raw(Box::new(self))
    }

    /// Reclaims a result produced by `into_raw` together with its strings.
    ///
    /// # Safety
    /// `result` must be null or a pointer from `into_raw` not yet released.
    pub unsafe fn release(result: *mut ApiResult) {
        if result.is_null() {
            return;
        }

        let result = Box::from_raw(result);
        for text in [result.data, result.error] {
            if !text.is_null() {
                drop(CString::from_raw(text));
            }
        }
    }
}
