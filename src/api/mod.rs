pub mod types;
pub mod services;
pub mod endpoints;

pub use types::ApiResult;
pub use endpoints::*;
