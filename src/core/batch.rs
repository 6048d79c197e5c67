// src/core/batch.rs
use std::time::Duration;

use chrono::Local;
use log::{info, warn};

use crate::api::login::KoyebLoginRequester;
use crate::api::models::{Account, Outcome};

/// Unconditional throttle between attempts so the login endpoint's abuse
/// protection is not tripped. Not backoff; never adjusted.
const PER_ACCOUNT_DELAY: Duration = Duration::from_secs(5);

/// Splits the configured entries into checkable accounts and skipped ones,
/// preserving order. Skipped entries never produce an outcome record.
pub fn split_valid(accounts: Vec<Account>) -> (Vec<Account>, Vec<Account>) {
    accounts.into_iter().partition(Account::is_complete)
}

/// Checks every valid account in order, one attempt each, pausing
/// `PER_ACCOUNT_DELAY` after each attempt.
pub async fn process_accounts(
    accounts: Vec<Account>,
    requester: &KoyebLoginRequester,
) -> Vec<Outcome> {
    let (valid, skipped) = split_valid(accounts);
    for account in &skipped {
        warn!("⚠️  Incomplete account entry, skipping: {}", account.email);
    }

    let total = valid.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, account) in valid.into_iter().enumerate() {
        info!("🔄 Checking account {}/{}: {}", index + 1, total, account.email);
        let outcome = requester
            .check_account(&account.email, &account.password)
            .await;

        if outcome.succeeded() {
            info!("✅ {} - {}", account.email, outcome.detail());
        } else {
            warn!("❌ {} - {}", account.email, outcome.detail());
        }

        outcomes.push(Outcome {
            email: account.email.trim().to_string(),
            outcome,
        });

        tokio::time::sleep(PER_ACCOUNT_DELAY).await;
    }

    outcomes
}

/// Aggregate view of one run, derived once from the outcome list.
#[derive(Debug)]
pub struct RunSummary {
    pub total: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub checked_at: String,
    outcomes: Vec<Outcome>,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: Vec<Outcome>) -> Self {
        let success_count = outcomes.iter().filter(|o| o.outcome.succeeded()).count();
        RunSummary {
            total: outcomes.len(),
            success_count,
            failure_count: outcomes.len() - success_count,
            checked_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            outcomes,
        }
    }

    /// Renders the consolidated Telegram message for the run.
    pub fn render(&self) -> String {
        let mut message = format!(
            "🤖 *Koyeb login status report*\n⏰ *Checked at:* {}\n\n📊 Total: {} account(s)\n✅ Success: {} | ❌ Failed: {}\n\n",
            self.checked_at, self.total, self.success_count, self.failure_count
        );

        let blocks: Vec<String> = self
            .outcomes
            .iter()
            .map(|record| {
                if record.outcome.succeeded() {
                    format!("📌 Account: {}\n✅ {}\n", record.email, record.outcome.detail())
                } else {
                    format!(
                        "📌 Account: {}\n❌ Login failed\nReason: {}\n",
                        record.email,
                        record.outcome.detail()
                    )
                }
            })
            .collect();

        message.push_str(&blocks.join("\n"));
        message
    }
}
