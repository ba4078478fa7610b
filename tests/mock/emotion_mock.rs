use std::ffi::{CStr, CString};

use companion_affect::api::{free_api_result, ApiResult};

pub struct TestEmotionData;

impl TestEmotionData {
    pub fn happy_texts() -> Vec<&'static str> {
        vec![
            "I'm so happy today",
            "This is wonderful news",
            "I love spending time with friends",
            "Pure joy",
        ]
    }

    pub fn sad_texts() -> Vec<&'static str> {
        vec![
            "I'm feeling really depressed",
            "I miss my old home",
            "So lonely tonight",
            "I'm sorry it ended",
        ]
    }

    pub fn worried_texts() -> Vec<&'static str> {
        vec![
            "I'm nervous about tomorrow",
            "I'm scared of the dark",
            "Too much stress at work",
        ]
    }

    /// Text that matches no keyword, punctuation or polarity word.
    pub fn signal_free_texts() -> Vec<&'static str> {
        vec![
            "the train leaves at noon",
            "1234 5678",
            "",
            "   ",
            "zzz",
            "Hello 世界",
        ]
    }
}

/// Copies out the payload of an `ApiResult` and frees it.
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<String>,
    pub error: Option<String>,
}

pub fn c_string(value: &str) -> CString {
    CString::new(value).unwrap()
}

pub fn take_api_result(result: *mut ApiResult) -> ApiResponse {
    assert!(!result.is_null());

    let response = unsafe {
        let api_result = &*result;
        ApiResponse {
            success: api_result.success == 1,
            data: (!api_result.data.is_null())
                .then(|| CStr::from_ptr(api_result.data).to_string_lossy().into_owned()),
            error: (!api_result.error.is_null())
                .then(|| CStr::from_ptr(api_result.error).to_string_lossy().into_owned()),
        }
    };

    free_api_result(result);
    response
}
