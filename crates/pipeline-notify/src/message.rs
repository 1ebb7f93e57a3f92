//! Slack message layout for pipeline results.

use serde::Serialize;
use tracing::{debug, error};

use crate::error::{NotifyError, Result};
use crate::request::{NotificationRequest, PipelineType};

/// Build the Slack payload for a finished pipeline.
///
/// The attachment carries the status color and always holds, in order: a
/// title, a body line, a status/duration row and a single button. Deployment
/// pipelines get an extra "Triggered by" context block at the end.
///
/// # Errors
///
/// Returns [`NotifyError::UnrecognizedPipelineType`] when the pipeline type
/// has no layout.
pub fn build_message(request: &NotificationRequest) -> Result<NotificationDocument> {
    let layout = Layout::for_request(request)?;
    let status = request.job_status;

    let mut blocks = vec![
        Block::text(layout.title),
        Block::text(layout.body),
        Block::Section {
            text: None,
            fields: Some(vec![
                TextObject::mrkdwn(format!("*Status:*\n{}", status.as_str())),
                TextObject::mrkdwn(format!("*Duration:*\n{}", request.pipeline_duration)),
            ]),
        },
        Block::Actions {
            elements: vec![Element::Button {
                text: TextObject::plain(layout.button_text),
                url: request.pipeline_url.clone(),
            }],
        },
    ];

    if request.pipeline_type == PipelineType::Deployment {
        let user = request.triggering_user.as_deref().unwrap_or_default();
        blocks.push(Block::Context {
            elements: vec![TextObject::plain(format!("Triggered by {user}"))],
        });
    }

    debug!(
        pipeline_type = %request.pipeline_type,
        block_count = blocks.len(),
        "Built Slack message"
    );

    Ok(NotificationDocument {
        attachments: vec![Attachment {
            color: status.color().to_string(),
            blocks,
        }],
    })
}

/// Strip a trailing `.git` and the first `git.` from a repository URL.
///
/// `https://git.example.com/org/repo.git` becomes `https://example.com/org/repo`.
#[must_use]
pub fn public_repo_link(repo_url: &str) -> String {
    let url = repo_url.strip_suffix(".git").unwrap_or(repo_url);
    url.replacen("git.", "", 1)
}

/// Pipeline-type dependent parts of the message.
struct Layout {
    title: String,
    body: String,
    button_text: &'static str,
}

impl Layout {
    fn for_request(request: &NotificationRequest) -> Result<Self> {
        match &request.pipeline_type {
            PipelineType::Deployment => {
                let repo = public_repo_link(&request.public_repo_url);
                let mr_id = request.merge_request_id.as_deref().unwrap_or_default();
                let mr_title = request.merge_request_title.as_deref().unwrap_or_default();
                Ok(Self {
                    title: "*External MR Development Pipeline*".to_string(),
                    body: format!("<{repo}/-/merge_requests/{mr_id}|MR Title: {mr_title}>"),
                    button_text: "View Pipeline",
                })
            }
            PipelineType::Daily => Ok(Self {
                title: "*Daily Pipeline*".to_string(),
                body: format!("Pipeline: {}", request.pipeline_id),
                button_text: "View Results",
            }),
            PipelineType::Unknown(raw) => {
                error!(pipeline_type = %raw, "No message layout for pipeline type");
                Err(NotifyError::UnrecognizedPipelineType(raw.clone()))
            }
        }
    }
}

// =============================================================================
// Slack payload types
// =============================================================================

/// Webhook payload: one colored attachment made of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationDocument {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub color: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<TextObject>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<TextObject>>,
    },
    Actions {
        elements: Vec<Element>,
    },
    Context {
        elements: Vec<TextObject>,
    },
}

impl Block {
    fn text(text: String) -> Self {
        Self::Section {
            text: Some(TextObject::mrkdwn(text)),
            fields: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Button { text: TextObject, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
    PlainText { text: String, emoji: bool },
}

impl TextObject {
    fn mrkdwn(text: String) -> Self {
        Self::Mrkdwn { text }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: true,
        }
    }
}
