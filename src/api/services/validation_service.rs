use std::ffi::CStr;
use std::os::raw::c_char;

use crate::api::types::ApiResult;
use crate::config::CompanionConfig;

pub fn parse_c_string(ptr: *const c_char, field_name: &str) -> Result<String, *mut ApiResult> {
    if ptr.is_null() {
        return Err(ApiResult::error(format!("{} is null", field_name)).into_raw());
    }

    unsafe {
        match CStr::from_ptr(ptr).to_str() {
            Ok(s) => Ok(s.to_string()),
            Err(_) => Err(ApiResult::error(format!("Invalid UTF-8 string for {}", field_name)).into_raw()),
        }
    }
}

pub fn parse_optional_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }

    unsafe { CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string()) }
}

/// A missing or blank config falls back to the defaults.
pub fn parse_config_json(config_json: Option<&str>) -> Result<CompanionConfig, *mut ApiResult> {
    let config_str = match config_json.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(CompanionConfig::default()),
    };

    let config: CompanionConfig = serde_json::from_str(config_str)
        .map_err(|e| ApiResult::error(format!("Failed to parse config: {}", e)).into_raw())?;

    config
        .validate()
        .map_err(|e| ApiResult::error(format!("Invalid config: {}", e)).into_raw())?;

    Ok(config)
}
