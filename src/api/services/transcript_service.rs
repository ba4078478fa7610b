use crate::modules::conversation::ConversationSession;

pub fn format_transcript_json(session: &ConversationSession) -> Result<String, String> {
    let messages = session
        .transcript()
        .map_err(|e| format!("Failed to get transcript: {}", e))?;

    serde_json::to_string(&messages).map_err(|e| format!("Failed to serialize transcript: {}", e))
}
