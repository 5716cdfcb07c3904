pub(crate) mod auth_failure;
pub(crate) mod session_context;
pub(crate) mod session_state;

pub use auth_failure::AuthFailure;
pub use session_context::{SESSION_KEY, SessionContext};
pub use session_state::SessionState;
