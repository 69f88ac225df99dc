// NotifyInbox - notification inbox core
// Entry point: builds the inbox and prints the current view as JSON

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for the JSON view
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notifyinbox=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting NotifyInbox");

    let data_dir = notifyinbox::app::data_dir().context("Failed to resolve data directory")?;
    let state = notifyinbox::app::setup(data_dir)
        .await
        .context("Failed to initialize inbox")?;

    let inbox = notifyinbox::commands::get_inbox(&state).await?;
    tracing::info!(
        "Showing {} notifications, {} unread",
        inbox.notifications.len(),
        inbox.unread_count
    );

    println!("{}", serde_json::to_string_pretty(&inbox)?);

    Ok(())
}
