//! Slack notifications for finished CI pipelines.
//!
//! This crate turns a pipeline result (status, duration, merge request
//! details) into a Slack block-kit attachment and posts it to an incoming
//! webhook. It is meant to run once, as the last job of a pipeline.
//!
//! # Usage
//!
//! ```no_run
//! use pipeline_notify::{build_message, format_duration, JobStatus, NotificationRequest, PipelineType, SlackWebhook};
//!
//! # async fn run() -> Result<(), pipeline_notify::NotifyError> {
//! let request = NotificationRequest {
//!     pipeline_type: PipelineType::Daily,
//!     job_status: JobStatus::Success,
//!     merge_request_id: None,
//!     merge_request_title: None,
//!     triggering_user: None,
//!     pipeline_id: "1234".to_string(),
//!     pipeline_duration: format_duration(754),
//!     public_repo_url: String::new(),
//!     pipeline_url: "https://gitlab.example.com/group/project/-/pipelines/1234".to_string(),
//!     project_path: None,
//!     pipeline_iid: None,
//!     merge_request_event_user: None,
//! };
//!
//! let message = build_message(&request)?;
//! SlackWebhook::new(Some("https://hooks.slack.com/services/...".to_string()))
//!     .send(&message)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! [`NotifyConfig`] reads the GitLab CI environment (`PIPELINE_TYPE`,
//! `CI_PIPELINE_ID`, `CI_PIPELINE_CREATED_AT`, `SLACK_HOOK_URL`, ...) once at
//! start-up. Core logic never looks at the environment itself.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod duration;
pub mod error;
pub mod message;
pub mod request;
pub mod slack;

pub use config::NotifyConfig;
pub use duration::{format_duration, pipeline_duration};
pub use error::NotifyError;
pub use message::{build_message, NotificationDocument};
pub use request::{JobStatus, NotificationRequest, PipelineType};
pub use slack::SlackWebhook;
