mod auth;

pub use auth::{SessionUser, SESSION_COOKIE};
