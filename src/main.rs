//! Inspection CLI for the "What's New" notification catalog.

use anyhow::{Context, Result};
use clap::Parser;
use whats_new::bundle::Bundle;
use whats_new::catalog::{self, Description};
use whats_new::registry;

/// Render the translated "What's New" catalog for a locale.
#[derive(Parser)]
#[command(name = "whats-new")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Locale tag for date display (underscore or hyphen separated).
    #[arg(long, default_value = "en-US")]
    locale: String,

    /// Emit the catalog as JSON instead of a text listing.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = Cli::parse();

    registry::validate().context("Embedded notification registry is defective")?;

    let bundle = Bundle::english()?;
    tracing::debug!(messages = bundle.len(), "loaded embedded English bundle");

    let notifications = catalog::translated_notifications(&bundle, Some(&cli.locale))?;
    tracing::info!(
        count = notifications.len(),
        locale = %cli.locale,
        "projected catalog"
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&notifications)
            .context("Failed to serialize catalog")?;
        println!("{json}");
        return Ok(());
    }

    for notification in notifications.values() {
        if notification.date.is_empty() {
            println!("#{} {}", notification.id, notification.title);
        } else {
            println!(
                "#{} {} ({})",
                notification.id, notification.title, notification.date
            );
        }
        match &notification.description {
            Description::Text(text) => println!("    {text}"),
            Description::Paragraphs(paragraphs) => {
                for paragraph in paragraphs {
                    println!("    {paragraph}");
                }
            }
        }
        if let Some(action) = &notification.action_text {
            println!("    -> {action}");
        }
        println!();
    }

    Ok(())
}
