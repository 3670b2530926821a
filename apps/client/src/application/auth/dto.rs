use crate::domain::auth::user::{LoginRequest, RegisterRequest};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
    pub password_confirm: String,
    #[validate(length(min = 1, max = 50))]
    pub residence_prefecture: String,
    #[validate(length(min = 1, max = 50))]
    pub residence_city: String,
}

impl SignupForm {
    pub fn into_request(self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            residence_prefecture: self.residence_prefecture.trim().to_string(),
            residence_city: self.residence_city.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

impl LoginForm {
    pub fn into_request(self) -> LoginRequest {
        LoginRequest {
            username: self.email.trim().to_string(),
            password: self.password,
        }
    }
}
