pub mod error;
pub mod message;
pub mod helpers;
pub mod transcript;

pub use error::ChatError;
pub use message::{format_timestamp, generate_message_id, ChatMessage, Sender};
pub use helpers::{is_message_empty, sanitize_input, truncate_message, typing_frames};
pub use transcript::{SessionId, TranscriptStore};
