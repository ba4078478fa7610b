pub mod emotion;
pub mod chat;
pub mod character;
pub mod conversation;
