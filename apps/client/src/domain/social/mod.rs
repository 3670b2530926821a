pub mod comment;
pub mod like;
pub mod post;
pub mod repository;
pub mod value_objects;
