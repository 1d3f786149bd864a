//! Langsift - Demo Entry Point
//!
//! Detects the language of a single text argument and prints the
//! structured result. Purely illustrative; all logic lives in the
//! library.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use langsift::{LanguageDetector, DEFAULT_SAMPLE_TEXT};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "langsift=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    info!("Starting langsift v{}", env!("CARGO_PKG_VERSION"));

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SAMPLE_TEXT.to_string());

    let detector = LanguageDetector::new()?;
    let results = detector.detect(&text, true);

    let output = serde_json::json!({
        "text": text,
        "result": results,
        "tip": "Pass a text as the first argument to detect other phrases.",
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
