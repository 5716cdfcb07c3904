use serde::Deserialize;

/// Body of `POST /auth/register` and `POST /auth/login`.
///
/// Both fields are optional at the wire level so a missing field becomes a
/// validation error rather than a malformed-body error.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
