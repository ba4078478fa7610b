use chrono::Utc;
use log::info;
use std::os::raw::c_char;

use crate::api::{
    types::ApiResult,
    services::{
        validation_service::*,
        session_service::{
            format_analysis_json, format_config_json, format_outcome_json, register_chat_session, take_chat_session,
            with_chat_session,
        },
        transcript_service::format_transcript_json,
    },
};
use crate::modules::conversation::ConversationSession;
use crate::modules::emotion::{classify, intensity_label, EmotionLabel};

#[no_mangle]
pub extern "C" fn classify_text(text: *const c_char) -> *mut ApiResult {
    let text_str = match parse_c_string(text, "Text string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    ApiResult::success(format_analysis_json(&classify(&text_str))).into_raw()
}

#[no_mangle]
pub extern "C" fn describe_intensity(emotion: *const c_char, intensity: f32) -> *mut ApiResult {
    let emotion_str = match parse_c_string(emotion, "Emotion string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let emotion: EmotionLabel = match emotion_str.parse() {
        Ok(label) => label,
        Err(e) => return ApiResult::error(format!("{}", e)).into_raw(),
    };

    ApiResult::success(intensity_label(emotion, intensity).to_string()).into_raw()
}

#[no_mangle]
pub extern "C" fn create_chat_session(config_json: *const c_char) -> *mut ApiResult {
    let config_str = parse_optional_c_string(config_json);

    let config = match parse_config_json(config_str.as_deref()) {
        Ok(config) => config,
        Err(result) => return result,
    };

    let session = ConversationSession::new(config);
    let session_id = session.session_id.clone();

    if let Err(result) = register_chat_session(session) {
        return result;
    }

    let response_data = serde_json::json!({
        "session_id": session_id
    })
    .to_string();

    ApiResult::success(response_data).into_raw()
}

#[no_mangle]
pub extern "C" fn remove_chat_session(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let session = match take_chat_session(&session_id_str) {
        Ok(session) => session,
        Err(result) => return result,
    };

    if let Err(e) = session.close() {
        return ApiResult::error(format!("Failed to remove transcript: {}", e)).into_raw();
    }

    info!("Removed chat session {}", session_id_str);
    ApiResult::success(format!("Chat session '{}' removed successfully", session_id_str)).into_raw()
}

#[no_mangle]
pub extern "C" fn send_user_message(session_id: *const c_char, text: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let text_str = match parse_c_string(text, "Text string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_chat_session(&session_id_str, |session| {
        let outcome = session
            .receive_user_message(&text_str, Utc::now())
            .map_err(|e| format!("Failed to record user message: {}", e))?;
        format_outcome_json(&outcome)
    })
}

#[no_mangle]
pub extern "C" fn record_ai_reply(session_id: *const c_char, text: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let reply = parse_optional_c_string(text);

    with_chat_session(&session_id_str, |session| {
        let now = Utc::now();
        let outcome = match reply.as_deref() {
            Some(text) => session.record_reply(text, now),
            None => session.record_reply_failure(now),
        }
        .map_err(|e| format!("Failed to record reply: {}", e))?;
        format_outcome_json(&outcome)
    })
}

#[no_mangle]
pub extern "C" fn get_character_state(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_chat_session(&session_id_str, |session| {
        let state = session.character(Utc::now());
        serde_json::to_string(&state).map_err(|e| format!("Failed to serialize character state: {}", e))
    })
}

#[no_mangle]
pub extern "C" fn get_transcript(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_chat_session(&session_id_str, |session| format_transcript_json(session))
}

/// Returns the session's effective configuration, including the character's
/// appearance and animation timing for the host renderer.
#[no_mangle]
pub extern "C" fn get_session_config(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_chat_session(&session_id_str, |session| format_config_json(&session.config))
}

#[no_mangle]
pub extern "C" fn clear_transcript(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_chat_session(&session_id_str, |session| {
        session
            .clear()
            .map_err(|e| format!("Failed to clear transcript: {}", e))?;
        Ok("Transcript cleared successfully".to_string())
    })
}

#[no_mangle]
pub extern "C" fn free_api_result(result: *mut ApiResult) {
    unsafe { ApiResult::release(result) }
}
