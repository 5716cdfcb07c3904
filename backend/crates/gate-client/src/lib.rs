//! gate-client library
//!
//! HTTP client for the auth API, client-side session state, and the pieces
//! of the `gate` command-line front end.

pub mod cli;
pub(crate) mod client;
pub mod command_error;
pub mod commands;
pub mod logger;
pub(crate) mod session;
pub mod settings;
pub(crate) mod storage;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
pub use command_error::{CommandError, Result as CommandResult};
pub use session::{AuthFailure, SESSION_KEY, SessionContext, SessionState};
pub use settings::ClientSettings;
pub use storage::LocalStorage;
pub use storage::error::{Result as StorageResult, StorageError};
