pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, logout, register},
        auth_response::AuthResponse,
        credentials_request::CredentialsRequest,
        message_response::MessageResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
};
pub use app_state::AppState;

pub use crate::routes::build_router;
