use crate::{CliClientResult, ClientError};

use gate_core::User;

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

const REGISTER_PATH: &str = "/auth/register";
const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";

/// HTTP client for the gate-server auth API
#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl Client {
    /// `base_url` is the server root, e.g. "http://127.0.0.1:8000"
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send and decode the body.
    ///
    /// A non-2xx status, or a body without `success: true`, becomes
    /// [`ClientError::Api`] carrying the server's message when it sent one.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        let confirmed = body.get("success").and_then(Value::as_bool) == Some(true);
        if !status.is_success() || !confirmed {
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN");
            // Nested `error.message` first, then a top-level `message`
            let message = error
                .and_then(|e| e.get("message"))
                .or_else(|| body.get("message"))
                .and_then(Value::as_str)
                .map(String::from);

            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        Ok(body)
    }

    async fn authenticate(&self, path: &str, email: &str, password: &str) -> CliClientResult<User> {
        let req = self
            .request(Method::POST, path)
            .json(&CredentialsBody { email, password });
        let mut body = self.execute(req).await?;

        let data = body.get_mut("data").map(Value::take).unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    /// POST /auth/register
    pub async fn register(&self, email: &str, password: &str) -> CliClientResult<User> {
        self.authenticate(REGISTER_PATH, email, password).await
    }

    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<User> {
        self.authenticate(LOGIN_PATH, email, password).await
    }

    /// POST /auth/logout
    pub async fn logout(&self) -> CliClientResult<()> {
        let req = self.request(Method::POST, LOGOUT_PATH);
        self.execute(req).await?;
        Ok(())
    }
}
