mod auth;
pub use auth::*;

mod uuid;
pub use uuid::*;
