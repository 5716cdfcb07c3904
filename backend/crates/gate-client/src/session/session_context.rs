//! Client-side session: who is logged in, mirrored into local storage so it
//! survives restarts.

use crate::{AuthFailure, Client, ClientError, LocalStorage, SessionState};

use gate_core::User;

use log::{info, warn};

/// Storage key holding the sanitized user JSON
pub const SESSION_KEY: &str = "user";

#[derive(Debug, Clone, Copy)]
enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    fn rejected_fallback(self) -> &'static str {
        match self {
            AuthAction::Login => "Login failed. Please check your credentials.",
            AuthAction::Register => "Registration failed. Please try again.",
        }
    }

    fn unexpected_message(self) -> &'static str {
        match self {
            AuthAction::Login => "An unexpected network or server error occurred during login.",
            AuthAction::Register => {
                "An unexpected network or server error occurred during registration."
            }
        }
    }
}

pub struct SessionContext {
    client: Client,
    storage: LocalStorage,
    state: SessionState,
    last_error: Option<String>,
}

impl SessionContext {
    /// Restore any stored session.
    ///
    /// A stored value that does not decode as a user is removed and the
    /// context starts anonymous.
    pub fn initialize(client: Client, storage: LocalStorage) -> Self {
        let state = Self::restore(&storage);
        Self {
            client,
            storage,
            state,
            last_error: None,
        }
    }

    fn restore(storage: &LocalStorage) -> SessionState {
        let stored = match storage.get_item(SESSION_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return SessionState::Anonymous,
            Err(e) => {
                warn!("Could not read stored session: {}", e);
                return SessionState::Anonymous;
            }
        };

        match serde_json::from_str::<User>(&stored) {
            Ok(user) => {
                info!("Restored session for {}", user.email);
                SessionState::Authenticated(user)
            }
            Err(e) => {
                warn!("Stored session is corrupted, discarding: {}", e);
                if let Err(e) = storage.remove_item(SESSION_KEY) {
                    warn!("Failed to remove corrupted session: {}", e);
                }
                SessionState::Anonymous
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Message from the most recent failed login or registration
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthFailure> {
        let result = self.client.login(email, password).await;
        self.complete(AuthAction::Login, result)
    }

    pub async fn register(&mut self, email: &str, password: &str) -> Result<User, AuthFailure> {
        let result = self.client.register(email, password).await;
        self.complete(AuthAction::Register, result)
    }

    /// Clear the session locally, then tell the server.
    ///
    /// The local session is gone even if the server cannot be reached.
    pub async fn logout(&mut self) {
        self.state = SessionState::Anonymous;
        self.last_error = None;

        if let Err(e) = self.storage.remove_item(SESSION_KEY) {
            warn!("Failed to remove stored session: {}", e);
        }

        if let Err(e) = self.client.logout().await {
            warn!("Server logout notification failed: {}", e);
        }

        info!("Logged out");
    }

    /// Apply the outcome of an auth call. Failures leave the current session
    /// as it was.
    fn complete(
        &mut self,
        action: AuthAction,
        result: Result<User, ClientError>,
    ) -> Result<User, AuthFailure> {
        self.last_error = None;

        let outcome = match result {
            Ok(user) => self.store_session(action, user),
            Err(ClientError::Api {
                status, message, ..
            }) => Err(AuthFailure::Rejected {
                message: message.unwrap_or_else(|| action.rejected_fallback().to_string()),
                status,
            }),
            Err(e) => {
                warn!("{:?} request failed: {}", action, e);
                Err(AuthFailure::Unexpected {
                    message: action.unexpected_message().to_string(),
                })
            }
        };

        if let Err(ref failure) = outcome {
            self.last_error = Some(failure.message().to_string());
        }
        outcome
    }

    fn store_session(&mut self, action: AuthAction, user: User) -> Result<User, AuthFailure> {
        if let Err(e) = self.storage.set_json(SESSION_KEY, &user) {
            warn!("Failed to persist session: {}", e);
            return Err(AuthFailure::Unexpected {
                message: action.unexpected_message().to_string(),
            });
        }

        info!("Session started for {}", user.email);
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }
}
