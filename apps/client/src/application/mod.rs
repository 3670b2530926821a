pub mod auth;
pub mod comments;
pub mod like_toggle;
pub mod posts;
