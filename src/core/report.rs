// src/core/report.rs
use std::time::Duration;

use log::{error, info, warn};

use crate::config::env::TelegramConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends one message to the configured Telegram chat. Best-effort: a missing
/// configuration or a failed request is logged and swallowed, never propagated.
pub async fn notify(config: Option<&TelegramConfig>, text: &str) {
    let Some(config) = config else {
        warn!("⚠️  TG_BOT_TOKEN or TG_CHAT_ID not set, skipping Telegram notification");
        return;
    };

    let url = format!("https://api.telegram.org/bot{}/sendMessage", config.bot_token);
    let form = [
        ("chat_id", config.chat_id.as_str()),
        ("text", text),
        ("parse_mode", "Markdown"),
    ];

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .form(&form)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await;

    match response {
        Ok(response) if response.status().is_success() => {
            info!("✅ Telegram message sent");
        }
        Ok(response) => {
            error!(
                "❌ Failed to send Telegram message: status {}",
                response.status()
            );
        }
        Err(err) => {
            error!("❌ Failed to send Telegram message: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_config_is_a_silent_no_op() {
        // Must return immediately without any network attempt.
        notify(None, "report body").await;
    }
}
