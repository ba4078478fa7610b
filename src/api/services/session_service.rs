use log::warn;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::api::types::ApiResult;
use crate::config::CompanionConfig;
use crate::modules::chat::SessionId;
use crate::modules::conversation::{ConversationSession, MessageOutcome};
use crate::modules::emotion::EmotionAnalysis;

pub static CHAT_SESSIONS: OnceLock<Mutex<HashMap<SessionId, ConversationSession>>> = OnceLock::new();

pub fn get_chat_sessions() -> Result<MutexGuard<'static, HashMap<SessionId, ConversationSession>>, *mut ApiResult> {
    let sessions_mutex = CHAT_SESSIONS.get_or_init(|| Mutex::new(HashMap::new()));

    sessions_mutex.lock().map_err(|_| {
        warn!("Chat session registry lock is poisoned");
        ApiResult::error("Failed to acquire session lock - mutex poisoned".to_string()).into_raw()
    })
}

pub fn register_chat_session(session: ConversationSession) -> Result<(), *mut ApiResult> {
    let mut sessions = get_chat_sessions()?;
    if sessions.contains_key(&session.session_id) {
        return Err(ApiResult::error(format!("Chat session '{}' already exists", session.session_id)).into_raw());
    }
    sessions.insert(session.session_id.clone(), session);
    Ok(())
}

pub fn take_chat_session(session_id: &SessionId) -> Result<ConversationSession, *mut ApiResult> {
    let mut sessions = get_chat_sessions()?;
    sessions
        .remove(session_id)
        .ok_or_else(|| ApiResult::error(format!("Chat session '{}' not found", session_id)).into_raw())
}

pub fn with_chat_session<F>(session_id: &SessionId, f: F) -> *mut ApiResult
where
    F: FnOnce(&mut ConversationSession) -> Result<String, String>,
{
    let mut sessions = match get_chat_sessions() {
        Ok(sessions) => sessions,
        Err(result) => return result,
    };

    let session = match sessions.get_mut(session_id) {
        Some(session) => session,
        None => {
            return ApiResult::error(format!(
                "Chat session '{}' not found. Call create_chat_session first.",
                session_id
            ))
            .into_raw()
        }
    };

    ApiResult::from_result(f(session)).into_raw()
}

pub fn format_analysis_json(analysis: &EmotionAnalysis) -> String {
    serde_json::json!({
        "primaryEmotion": analysis.primary_emotion,
        "confidence": analysis.confidence,
        "intensity": analysis.intensity,
        "intensityLabel": analysis.intensity_label(),
        "shouldAnimate": analysis.should_animate(),
    })
    .to_string()
}

pub fn format_config_json(config: &CompanionConfig) -> Result<String, String> {
    serde_json::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

pub fn format_outcome_json(outcome: &MessageOutcome) -> Result<String, String> {
    serde_json::to_string(outcome).map_err(|e| format!("Failed to serialize message outcome: {}", e))
}
