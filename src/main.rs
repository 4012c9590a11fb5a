//! # Muezzin
//!
//! One-shot prayer-time notifier. Fetches today's takwim for an
//! e-solat zone, normalizes it into the canonical schedule, wraps it
//! in the shape the webhook trigger accepts, and posts it.
//!
//! Usage:
//!   WEBHOOK_URL=https://... muezzin          # card envelope, zone SGR01
//!   muezzin --zone WLY01 --envelope text     # another zone, minimal shape
//!   muezzin --verbose                        # debug logging

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use muezzin_channels::TeamsWebhook;
use muezzin_core::{DaySchedule, EnvelopeStyle};
use muezzin_esolat::{DEFAULT_ZONE, EsolatClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "muezzin",
    version,
    about = "🕌 Muezzin: posts today's prayer schedule to a Teams webhook"
)]
struct Cli {
    /// E-solat zone code
    #[arg(short, long, default_value = DEFAULT_ZONE)]
    zone: String,

    /// Envelope shape: card, text, or data
    #[arg(short, long, default_value = "card")]
    envelope: EnvelopeStyle,

    /// Destination webhook URL (overrides the WEBHOOK_URL env var)
    #[arg(long)]
    webhook_url: Option<String>,

    /// Send timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "muezzin=debug,muezzin_esolat=debug,muezzin_channels=debug"
    } else {
        "muezzin=info,muezzin_esolat=info,muezzin_channels=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    // Flag first, then environment
    let webhook_url = match cli
        .webhook_url
        .clone()
        .or_else(|| std::env::var("WEBHOOK_URL").ok())
    {
        Some(url) if !url.trim().is_empty() => url,
        _ => anyhow::bail!("no webhook URL configured: set WEBHOOK_URL or pass --webhook-url"),
    };

    // Fetch
    println!("Fetching today's schedule for zone {}...", cli.zone);
    let raw = EsolatClient::new()
        .fetch_today(&cli.zone)
        .await
        .context("fetching today's takwim")?;

    // Normalize
    let schedule = DaySchedule::from_raw(&raw)?;
    tracing::info!(
        "normalized {} ({}) for zone {}",
        schedule.date,
        schedule.hijri.display,
        schedule.zone
    );

    // Wrap
    let envelope = cli.envelope.wrap(&schedule)?;
    tracing::debug!("envelope style {}", cli.envelope.as_str());

    // Send
    println!("Sending payload for {}...", schedule.date);
    let outcome = TeamsWebhook::new(webhook_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs))
        .send(&envelope)
        .await
        .context("posting to the webhook")?;

    println!("{}", outcome.confirmation());
    Ok(())
}
