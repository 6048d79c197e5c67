// src/config/env.rs
use std::env;

use anyhow::{bail, Context, Result};

use crate::api::models::Account;

const ACCOUNTS_VAR: &str = "KOYEB_ACCOUNTS";
const TG_BOT_TOKEN_VAR: &str = "TG_BOT_TOKEN";
const TG_CHAT_ID_VAR: &str = "TG_CHAT_ID";

/// Reads the account list from the `KOYEB_ACCOUNTS` environment variable.
/// Fails when the variable is unset, not a JSON array, or empty.
pub fn load_accounts() -> Result<Vec<Account>> {
    let raw = env::var(ACCOUNTS_VAR)
        .with_context(|| format!("❌  {} environment variable is not set", ACCOUNTS_VAR))?;
    parse_accounts(&raw)
}

pub fn parse_accounts(raw: &str) -> Result<Vec<Account>> {
    let accounts: Vec<Account> = serde_json::from_str(raw).with_context(|| {
        format!(
            "⚠️  Failed to parse {} - expected a JSON array of {{email, password}} objects",
            ACCOUNTS_VAR
        )
    })?;
    if accounts.is_empty() {
        bail!("❌  {} contains no accounts", ACCOUNTS_VAR);
    }
    Ok(accounts)
}

/// Telegram destination. Both values must be present for notifications to go out.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl TelegramConfig {
    pub fn from_env() -> Option<Self> {
        Self::from_parts(env::var(TG_BOT_TOKEN_VAR).ok(), env::var(TG_CHAT_ID_VAR).ok())
    }

    pub fn from_parts(bot_token: Option<String>, chat_id: Option<String>) -> Option<Self> {
        match (bot_token, chat_id) {
            (Some(bot_token), Some(chat_id))
                if !bot_token.trim().is_empty() && !chat_id.trim().is_empty() =>
            {
                Some(TelegramConfig { bot_token, chat_id })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_account_list() {
        let raw = r#"[
            {"email": "a@example.com", "password": "one"},
            {"email": "b@example.com", "password": "two"}
        ]"#;
        let accounts = parse_accounts(raw).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].email, "a@example.com");
        assert_eq!(accounts[1].password, "two");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_accounts("not json").is_err());
    }

    #[test]
    fn rejects_non_array_value() {
        assert!(parse_accounts(r#"{"email": "a@example.com", "password": "x"}"#).is_err());
    }

    #[test]
    fn rejects_empty_array() {
        assert!(parse_accounts("[]").is_err());
    }

    #[test]
    fn telegram_config_needs_both_parts() {
        assert!(TelegramConfig::from_parts(Some("token".into()), Some("42".into())).is_some());
        assert!(TelegramConfig::from_parts(None, Some("42".into())).is_none());
        assert!(TelegramConfig::from_parts(Some("token".into()), None).is_none());
        assert!(TelegramConfig::from_parts(Some("  ".into()), Some("42".into())).is_none());
        assert!(TelegramConfig::from_parts(None, None).is_none());
    }
}
