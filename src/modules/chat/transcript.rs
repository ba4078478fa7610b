use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::error::ChatError;
use super::message::ChatMessage;
use crate::modules::emotion::EmotionLabel;

pub type SessionId = String;

lazy_static! {
    static ref TRANSCRIPTS: Mutex<HashMap<SessionId, Vec<ChatMessage>>> = Mutex::new(HashMap::new());
}

fn transcripts() -> Result<MutexGuard<'static, HashMap<SessionId, Vec<ChatMessage>>>, ChatError> {
    TRANSCRIPTS.lock().map_err(|_| ChatError::LockPoisoned)
}

/// Session-scoped message history. Lives only as long as the process.
pub struct TranscriptStore;

impl TranscriptStore {
    pub fn new() -> Self {
        TranscriptStore
    }

    pub fn insert(session_id: &SessionId, message: ChatMessage) -> Result<(), ChatError> {
        let mut transcripts = transcripts()?;
        transcripts.entry(session_id.clone()).or_insert_with(Vec::new).push(message);

        Ok(())
    }

    /// Appends and then drops the oldest messages beyond `max_messages`.
    pub fn insert_bounded(session_id: &SessionId, message: ChatMessage, max_messages: usize) -> Result<(), ChatError> {
        let mut transcripts = transcripts()?;
        let transcript = transcripts.entry(session_id.clone()).or_insert_with(Vec::new);

        transcript.push(message);
        if transcript.len() > max_messages {
            let overflow = transcript.len() - max_messages;
            transcript.drain(..overflow);
        }

        Ok(())
    }

    pub fn get_all(session_id: &SessionId) -> Result<Vec<ChatMessage>, ChatError> {
        let transcripts = transcripts()?;

        Ok(transcripts.get(session_id).cloned().unwrap_or_default())
    }

    pub fn update_message_emotion(
        session_id: &SessionId,
        message_id: &str,
        emotion: EmotionLabel,
    ) -> Result<(), ChatError> {
        let mut transcripts = transcripts()?;
        let transcript = transcripts
            .get_mut(session_id)
            .ok_or_else(|| ChatError::SessionNotFound(session_id.clone()))?;

        let message = transcript
            .iter_mut()
            .find(|message| message.id == message_id)
            .ok_or_else(|| ChatError::MessageNotFound(message_id.to_string()))?;

        message.emotion = Some(emotion);

        Ok(())
    }

    pub fn clear(session_id: &SessionId) -> Result<(), ChatError> {
        let mut transcripts = transcripts()?;

        if let Some(transcript) = transcripts.get_mut(session_id) {
            transcript.clear();
        }

        Ok(())
    }

    pub fn remove_session(session_id: &SessionId) -> Result<(), ChatError> {
        let mut transcripts = transcripts()?;

        transcripts.remove(session_id);

        Ok(())
    }

    pub fn get_message_count(session_id: &SessionId) -> Result<usize, ChatError> {
        let transcripts = transcripts()?;

        Ok(transcripts.get(session_id).map(|messages| messages.len()).unwrap_or(0))
    }
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}
