// src/api/login.rs
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;

use super::models::LoginOutcome;

const LOGIN_URL: &str = "https://app.koyeb.com/v1/account/login";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct KoyebLoginRequester {
    client: reqwest::Client,
}

impl KoyebLoginRequester {
    pub fn new() -> Self {
        KoyebLoginRequester {
            client: reqwest::Client::new(),
        }
    }

    /// Performs exactly one login attempt and classifies the result.
    /// Empty credentials short-circuit without touching the network.
    pub async fn check_account(&self, email: &str, password: &str) -> LoginOutcome {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return LoginOutcome::MissingCredential;
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let body = LoginRequest { email, password };

        let response = self
            .client
            .post(LOGIN_URL)
            .headers(headers)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    LoginOutcome::Success
                } else {
                    LoginOutcome::Transport(format!("login request failed with status {}", status))
                }
            }
            Err(err) if err.is_timeout() => LoginOutcome::Timeout,
            Err(err) => LoginOutcome::Transport(err.to_string()),
        }
    }
}

impl Default for KoyebLoginRequester {
    fn default() -> Self {
        Self::new()
    }
}
