//! Normalize a saved weather-alerts response and print the result.
//!
//! Run with: cargo run -p weather-alerts --example normalize_file -- tests/fixtures/nws_active_alerts.json

use std::env;
use std::fs;

use weather_alerts::Normalizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("weather_alerts=debug".parse()?),
        )
        .init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: normalize_file <payload.json>")?;
    let body = fs::read_to_string(&path)?;

    let result = Normalizer::default().normalize_str(&body);

    println!("=== {} ({}) ===\n", result.status.as_str(), result.status_message);
    match result.display_text() {
        Some(text) => println!("Banner: {}\n", text),
        None => println!("Banner: (hidden)\n"),
    }
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
