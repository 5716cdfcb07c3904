pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::user::User;
pub use models::user_document::UserDocument;
pub use models::user_id::generate_user_id;
pub use models::user_record::UserRecord;
pub use validation::CredentialValidator;
