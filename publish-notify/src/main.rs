use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use publish_notify::NotifyConfig;
use publish_notify::logging::{self, LogFormat};
use publish_notify::notification::{
    ChangeEvent, HandleOutcome, NotificationDispatcher, PublishNotifier, ReqwestTransport,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return Ok(());
    }

    // Load environment variables
    dotenvy::dotenv().ok();

    logging::init_logging(LogFormat::from_env())?;

    let config = NotifyConfig::from_env()?;
    let input = match args.first() {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read change event from {}", path))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read change event from stdin")?;
            buf
        }
    };
    let event: ChangeEvent =
        serde_json::from_str(&input).context("failed to parse change event")?;

    let transport = ReqwestTransport::new(config.request_timeout());
    let notifier = PublishNotifier::new(config, NotificationDispatcher::new(Arc::new(transport)));

    let outcome = notifier.handle(&event).await?;
    match outcome {
        HandleOutcome::NotEligible => info!(collection = event.collection(), "Nothing to announce"),
        HandleOutcome::Skipped => info!(collection = event.collection(), "Announcement skipped"),
        HandleOutcome::Sent(response) => info!(
            collection = event.collection(),
            status = response.status,
            "Announcement sent"
        ),
    }

    Ok(())
}

fn print_help() {
    println!("publish-notify - Announce newly published community content on Discord");
    println!();
    println!("Usage:");
    println!("  publish-notify [FILE]     # reads one change event as JSON from FILE");
    println!("  publish-notify < event    # or from stdin (also with FILE = -)");
    println!();
    println!("Change event:");
    println!("  {{\"collection\": \"map_pin\" | \"library_item\" | \"research\",");
    println!("   \"before\": {{...}} | null, \"after\": {{...}} | null}}");
    println!();
    println!("Environment variables:");
    println!("  SITE_URL=https://community.example.org   (required)");
    println!("  DISCORD_WEBHOOK_URL=<webhook url>         (empty disables sending)");
    println!("  NOTIFY_TIMEOUT_SECS=<seconds>             (optional request timeout)");
    println!("  LOG_FORMAT=text|json");
    println!("  RUST_LOG=publish_notify=info");
}
