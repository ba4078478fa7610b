pub mod session_service;
pub mod transcript_service;
pub mod validation_service;

pub use session_service::*;
pub use transcript_service::*;
pub use validation_service::*;
