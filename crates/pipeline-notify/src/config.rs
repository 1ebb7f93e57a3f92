//! Run configuration, parsed once from flags and CI environment variables.

use chrono::{DateTime, Utc};
use clap::Parser;

use crate::duration::pipeline_duration;
use crate::error::Result;
use crate::request::{JobStatus, NotificationRequest, PipelineType};
use crate::slack::SlackWebhook;

/// Send a Slack notification for a finished CI pipeline.
///
/// Everything except `--status` is normally picked up from the GitLab CI
/// environment; unset variables default to empty.
#[derive(Debug, Clone, Parser)]
#[command(name = "pipeline-notify")]
#[command(about = "Post a CI pipeline result to a Slack webhook")]
pub struct NotifyConfig {
    /// Pipeline status: success or failure.
    #[arg(long)]
    pub status: String,

    /// Pipeline type: deployment-pipeline or daily-pipeline.
    #[arg(long, env = "PIPELINE_TYPE", default_value = "")]
    pub pipeline_type: String,

    /// Project path, e.g. `group/project`.
    #[arg(long, env = "CI_PROJECT_PATH", default_value = "")]
    pub project_path: String,

    /// Public merge request number.
    #[arg(long, env = "FETCH_PUBLIC_MR_NUMBER", default_value = "")]
    pub merge_request_iid: String,

    /// Public merge request title.
    #[arg(long, env = "EXTERNAL_MR_TITLE", default_value = "")]
    pub merge_request_title: String,

    /// User who triggered the merge request event.
    #[arg(long, env = "CI_MERGE_REQUEST_EVENT_USER", default_value = "")]
    pub merge_request_event_user: String,

    /// Pipeline ID.
    #[arg(long, env = "CI_PIPELINE_ID", default_value = "")]
    pub pipeline_id: String,

    /// Project-scoped pipeline ID.
    #[arg(long, env = "CI_PIPELINE_IID", default_value = "")]
    pub pipeline_iid: String,

    /// Pipeline start time (`YYYY-MM-DDTHH:MM:SSZ`).
    #[arg(long, env = "CI_PIPELINE_CREATED_AT")]
    pub pipeline_created_at: Option<String>,

    /// Name of the user who started the pipeline.
    #[arg(long, env = "GITLAB_USER_NAME", default_value = "")]
    pub gitlab_user_name: String,

    /// Public repository URL the merge request belongs to.
    #[arg(long, env = "PUBLIC_REPO_URL", default_value = "")]
    pub public_repo_url: String,

    /// Link to the pipeline.
    #[arg(long, env = "CI_PIPELINE_URL", default_value = "")]
    pub pipeline_url: String,

    /// Slack incoming webhook URL.
    #[arg(long, env = "SLACK_HOOK_URL")]
    pub webhook_url: Option<String>,

    /// Print the payload instead of posting it.
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Enable verbose logging.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl NotifyConfig {
    /// Build the notification request for a run finishing at `now`.
    ///
    /// The status is checked first so a bad value aborts before anything else.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NotifyError::InvalidStatus`] for an unknown status and
    /// [`crate::NotifyError::InvalidTimestamp`] for a malformed start time.
    pub fn request(&self, now: DateTime<Utc>) -> Result<NotificationRequest> {
        let job_status: JobStatus = self.status.parse()?;
        let pipeline_duration = pipeline_duration(self.pipeline_created_at.as_deref(), now)?;

        Ok(NotificationRequest {
            pipeline_type: PipelineType::parse(&self.pipeline_type),
            job_status,
            merge_request_id: non_empty(&self.merge_request_iid),
            merge_request_title: non_empty(&self.merge_request_title),
            triggering_user: non_empty(&self.gitlab_user_name),
            pipeline_id: self.pipeline_id.clone(),
            pipeline_duration,
            public_repo_url: self.public_repo_url.clone(),
            pipeline_url: self.pipeline_url.clone(),
            project_path: non_empty(&self.project_path),
            pipeline_iid: non_empty(&self.pipeline_iid),
            merge_request_event_user: non_empty(&self.merge_request_event_user),
        })
    }

    /// Create the webhook sender for this configuration.
    #[must_use]
    pub fn webhook(&self) -> SlackWebhook {
        SlackWebhook::new(self.webhook_url.clone())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
