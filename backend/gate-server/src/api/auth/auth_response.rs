use gate_core::User;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub data: User,
    pub message: String,
}

impl AuthResponse {
    pub fn new(user: User, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: user,
            message: message.into(),
        }
    }
}
