mod login_user;
mod logout_user;
mod register_user;

// Glob re-exports keep the generated OpenAPI path items reachable alongside
// each handler.
pub use login_user::*;
pub use logout_user::*;
pub use register_user::*;
