pub mod auth;
pub mod auth_response;
pub mod credentials_request;
pub mod message_response;
