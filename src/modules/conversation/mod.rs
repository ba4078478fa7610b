pub mod session;

pub use session::{ConversationSession, MessageOutcome, REPLY_FAILURE_MESSAGE};
