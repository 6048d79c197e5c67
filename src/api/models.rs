// src/api/models.rs
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Account {
    pub email: String,
    pub password: String,
}

impl Account {
    /// An entry is checkable only when both fields survive trimming.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

/// Classified result of a single login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    MissingCredential,
    Timeout,
    Transport(String),
}

impl LoginOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    pub fn detail(&self) -> String {
        match self {
            LoginOutcome::Success => "login succeeded".to_string(),
            LoginOutcome::MissingCredential => "email or password is empty".to_string(),
            LoginOutcome::Timeout => "request timed out".to_string(),
            LoginOutcome::Transport(reason) => reason.clone(),
        }
    }
}

/// One record per processed account, appended in batch order.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub email: String,
    pub outcome: LoginOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_requires_both_fields() {
        let account = Account {
            email: "  user@example.com ".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(account.is_complete());

        let no_email = Account {
            email: "   ".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!no_email.is_complete());

        let no_password = Account {
            email: "user@example.com".to_string(),
            password: String::new(),
        };
        assert!(!no_password.is_complete());
    }

    #[test]
    fn timeout_detail_is_distinguishable() {
        let timeout = LoginOutcome::Timeout;
        let transport = LoginOutcome::Transport("connection refused".to_string());
        assert_ne!(timeout.detail(), transport.detail());
        assert_eq!(timeout.detail(), "request timed out");
    }

    #[test]
    fn only_success_counts_as_succeeded() {
        assert!(LoginOutcome::Success.succeeded());
        assert!(!LoginOutcome::MissingCredential.succeeded());
        assert!(!LoginOutcome::Timeout.succeeded());
        assert!(!LoginOutcome::Transport("500".to_string()).succeeded());
    }
}
