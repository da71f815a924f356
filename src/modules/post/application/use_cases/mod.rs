pub mod create_post;
pub mod delete_post;
pub mod get_feed;
pub mod get_own_posts;
pub mod update_post;
