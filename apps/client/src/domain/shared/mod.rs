pub mod errors;
pub mod notice;
