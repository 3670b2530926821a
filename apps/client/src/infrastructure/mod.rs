pub mod credentials;
pub mod http;
pub mod notices;
pub mod security;
