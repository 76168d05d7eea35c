//! Booking dialogue - interactive hotel booking over the terminal
//!
//! Walks one guest through room type, dates and guest count, quotes the
//! stay, and asks for confirmation. Nothing is persisted.

mod booking;
mod config;
mod phrases;
mod runtime;
mod state_machine;

use config::{DialogueConfig, LogFormat};
use rand::rngs::StdRng;
use rand::SeedableRng;
use runtime::{ProductionRuntime, RuntimeError, StdConsole};
use state_machine::DialogueContext;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DialogueConfig::from_env();
    init_logging(config.log_format);

    let context = DialogueContext::new(uuid::Uuid::new_v4().to_string())
        .with_exit_policy(config.exit_policy)
        .with_currency_symbol(config.currency_symbol);

    let runtime = ProductionRuntime::new(context, StdConsole::new(), StdRng::from_entropy());

    match runtime.run().await {
        Ok(_) => Ok(()),
        // Guest walked away (Ctrl-D or closed pipe); nothing to clean up
        Err(RuntimeError::InputClosed { state }) => {
            tracing::info!(state, "Input closed before the conversation finished");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Diagnostics go to stderr; stdout belongs to the conversation
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "booking_dialogue=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
