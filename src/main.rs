// main.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use api::login::KoyebLoginRequester;
use config::env::TelegramConfig;
use crate::core::batch::RunSummary;

mod api;
mod config;
mod core;

#[derive(Parser)]
#[command(name = "koyeb-keepalive", version, about = "Keep Koyeb accounts alive with periodic login checks")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    dotenv().ok();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    println!("{}", "🚀 Koyeb Keep-Alive".bold().cyan());

    let telegram = TelegramConfig::from_env();

    if let Err(err) = run(telegram.as_ref()).await {
        let message = format!("❌ Keep-alive run failed: {:#}", err);
        error!("{}", message);
        // The operator hears about total failures too, best-effort.
        core::report::notify(telegram.as_ref(), &message).await;
        eprintln!("{}", message.red().bold());
        return Err(err);
    }

    Ok(())
}

async fn run(telegram: Option<&TelegramConfig>) -> Result<()> {
    let accounts = config::env::load_accounts()?;
    info!("✅ Loaded {} account(s)", accounts.len());

    let requester = KoyebLoginRequester::new();
    let outcomes = core::batch::process_accounts(accounts, &requester).await;

    let summary = RunSummary::from_outcomes(outcomes);
    info!(
        "📋 Batch complete ({} checked, {} ok, {} failed), dispatching Telegram report",
        summary.total, summary.success_count, summary.failure_count
    );
    core::report::notify(telegram, &summary.render()).await;

    Ok(())
}
