//! Client for the remote account + document service.
//!
//! Plain request/response calls: no retry policy and no deduplication.
//! The only watchdog is a 5-second timeout on the sign-in call so a stuck
//! login never leaves the CLI hanging.

pub mod messages;

use crate::errors::{AppError, AppResult};
use crate::models::Profile;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

const LOGIN_WATCHDOG: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: Profile,
}

#[derive(Debug, Clone)]
pub struct RemoteClient {
    base_url: String,
    http: Client,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        if base_url.trim().is_empty() {
            return Err(AppError::Config(
                "remote_url is not set; add it to the configuration file".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send, check the status, decode. Provider codes become local-language
    /// messages here so callers only ever see `AppError::Remote`.
    fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> AppResult<T> {
        let res = req
            .send()
            .map_err(|e| AppError::Remote(transport_message(&e)))?;

        let status = res.status();
        if status.is_success() {
            return res
                .json::<T>()
                .map_err(|e| AppError::Remote(format!("Malformed service reply: {e}")));
        }

        let code = res
            .json::<ErrorResponse>()
            .map(|b| b.error)
            .unwrap_or_else(|_| default_code_for(status));

        Err(AppError::Remote(messages::translate(&code)))
    }

    // ---------------------------
    // Accounts
    // ---------------------------

    pub fn sign_in(&self, email: &str, password: &str) -> AppResult<(Profile, String)> {
        let req = self
            .http
            .post(self.endpoint("auth/login"))
            .timeout(LOGIN_WATCHDOG)
            .json(&json!({ "email": email, "password": password }));

        let auth: AuthResponse = self.execute(req)?;
        Ok((auth.user, auth.token))
    }

    pub fn sign_up(&self, email: &str, name: &str, password: &str) -> AppResult<(Profile, String)> {
        let req = self.http.post(self.endpoint("auth/signup")).json(&json!({
            "email": email,
            "name": name,
            "password": password,
        }));

        let auth: AuthResponse = self.execute(req)?;
        Ok((auth.user, auth.token))
    }

    pub fn sign_out(&self, token: &str) -> AppResult<()> {
        let req = self
            .http
            .post(self.endpoint("auth/logout"))
            .bearer_auth(token);
        self.execute::<serde_json::Value>(req)?;
        Ok(())
    }

    pub fn reset_email(&self, email: &str) -> AppResult<()> {
        let req = self
            .http
            .post(self.endpoint("auth/reset"))
            .json(&json!({ "email": email }));
        self.execute::<serde_json::Value>(req)?;
        Ok(())
    }

    pub fn update_password(&self, token: &str, new_password: &str) -> AppResult<()> {
        let req = self
            .http
            .post(self.endpoint("auth/password"))
            .bearer_auth(token)
            .json(&json!({ "password": new_password }));
        self.execute::<serde_json::Value>(req)?;
        Ok(())
    }

    // ---------------------------
    // Documents
    // ---------------------------

    pub fn doc_add<T: serde::Serialize>(
        &self,
        token: &str,
        collection: &str,
        doc: &T,
    ) -> AppResult<()> {
        let req = self
            .http
            .post(self.endpoint(&format!("collections/{collection}/documents")))
            .bearer_auth(token)
            .json(doc);
        self.execute::<serde_json::Value>(req)?;
        Ok(())
    }

    pub fn doc_query_eq<T: DeserializeOwned>(
        &self,
        token: &str,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Vec<T>> {
        let req = self
            .http
            .get(self.endpoint(&format!("collections/{collection}/documents")))
            .bearer_auth(token)
            .query(&[("field", field), ("value", value)]);
        self.execute(req)
    }

    pub fn doc_order_by<T: DeserializeOwned>(
        &self,
        token: &str,
        collection: &str,
        field: &str,
    ) -> AppResult<Vec<T>> {
        let req = self
            .http
            .get(self.endpoint(&format!("collections/{collection}/documents")))
            .bearer_auth(token)
            .query(&[("order_by", field)]);
        self.execute(req)
    }

    pub fn doc_delete(&self, token: &str, collection: &str, id: &str) -> AppResult<()> {
        let req = self
            .http
            .delete(self.endpoint(&format!("collections/{collection}/documents/{id}")))
            .bearer_auth(token);
        self.execute::<serde_json::Value>(req)?;
        Ok(())
    }
}

fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        messages::translate("network-request-failed")
    } else {
        format!("Could not reach the account service: {err}")
    }
}

fn default_code_for(status: StatusCode) -> String {
    match status.as_u16() {
        401 => "invalid-credentials".to_string(),
        404 => "user-not-found".to_string(),
        429 => "too-many-requests".to_string(),
        _ => format!("http-{}", status.as_u16()),
    }
}
