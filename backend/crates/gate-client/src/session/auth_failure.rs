use thiserror::Error;

/// Why a login or registration attempt did not produce a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// The server answered and said no (validation, conflict, bad credentials)
    #[error("{message}")]
    Rejected { message: String, status: u16 },

    /// No usable answer: transport failure, undecodable body, or local storage
    #[error("{message}")]
    Unexpected { message: String },
}

impl AuthFailure {
    pub fn message(&self) -> &str {
        match self {
            AuthFailure::Rejected { message, .. } => message,
            AuthFailure::Unexpected { message } => message,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, AuthFailure::Rejected { .. })
    }
}
