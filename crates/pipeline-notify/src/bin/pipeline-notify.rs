//! pipeline-notify - post a CI pipeline result to Slack.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pipeline_notify::{build_message, NotifyConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = NotifyConfig::parse();

    // Initialize logging
    let filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let request = config
        .request(Utc::now())
        .context("Failed to read pipeline result")?;

    info!(
        pipeline_type = %request.pipeline_type,
        status = request.job_status.as_str(),
        duration = %request.pipeline_duration,
        project = request.project_path.as_deref().unwrap_or_default(),
        pipeline_iid = request.pipeline_iid.as_deref().unwrap_or_default(),
        mr_event_user = request.merge_request_event_user.as_deref().unwrap_or_default(),
        "Building pipeline notification"
    );

    let message = build_message(&request).context("Failed to build Slack message")?;

    if config.dry_run {
        println!("{}", serde_json::to_string_pretty(&message)?);
        return Ok(());
    }

    config
        .webhook()
        .send(&message)
        .await
        .context("Failed to deliver Slack notification")?;

    info!("Pipeline notification sent");
    Ok(())
}
