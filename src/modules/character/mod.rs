pub mod state;

pub use state::{Animation, CharacterState};
