mod dashboard;
mod delete_post;
mod edit_post;
mod get_feed;

// Glob re-exports keep the generated OpenAPI path items reachable alongside
// each handler.
pub use dashboard::*;
pub use delete_post::*;
pub use edit_post::*;
pub use get_feed::*;
