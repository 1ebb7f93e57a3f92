//! Pipeline outcome types used to build a notification.

use std::fmt;
use std::str::FromStr;

use crate::error::NotifyError;

/// Final status of the pipeline job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// Every job passed
    Success,
    /// At least one job failed
    Failure,
}

impl JobStatus {
    /// Get the attachment color for this status.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Success => "#36A64F", // Green
            Self::Failure => "#E01E5A", // Red
        }
    }

    /// Get display text for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Passed",
            Self::Failure => "Failed",
        }
    }
}

impl FromStr for JobStatus {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("success") {
            Ok(Self::Success)
        } else if s.eq_ignore_ascii_case("failure") {
            Ok(Self::Failure)
        } else {
            Err(NotifyError::InvalidStatus(s.to_string()))
        }
    }
}

/// Kind of pipeline that finished, which selects the message layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineType {
    /// Development pipeline run for an external merge request
    Deployment,
    /// Scheduled nightly pipeline
    Daily,
    /// Anything else; keeps the raw value for diagnostics
    Unknown(String),
}

impl PipelineType {
    /// Parse the `PIPELINE_TYPE` value. Never fails, unknown values are kept.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "deployment-pipeline" | "deployment" => Self::Deployment,
            "daily-pipeline" | "daily" => Self::Daily,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for PipelineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deployment => f.write_str("deployment-pipeline"),
            Self::Daily => f.write_str("daily-pipeline"),
            Self::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

/// Everything the message builder needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub pipeline_type: PipelineType,
    pub job_status: JobStatus,
    pub merge_request_id: Option<String>,
    pub merge_request_title: Option<String>,
    pub triggering_user: Option<String>,
    pub pipeline_id: String,
    /// Pre-formatted, e.g. `"1h 2m 3s"` or `"N/A"`
    pub pipeline_duration: String,
    pub public_repo_url: String,
    pub pipeline_url: String,

    // Log context only, never rendered.
    pub project_path: Option<String>,
    pub pipeline_iid: Option<String>,
    pub merge_request_event_user: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        assert_eq!(JobStatus::Success.color(), "#36A64F");
        assert_eq!(JobStatus::Success.as_str(), "Passed");
        assert_eq!(JobStatus::Failure.color(), "#E01E5A");
        assert_eq!(JobStatus::Failure.as_str(), "Failed");
    }

    #[test]
    fn test_status_parse_ignores_case() {
        assert_eq!("success".parse::<JobStatus>().unwrap(), JobStatus::Success);
        assert_eq!("FAILURE".parse::<JobStatus>().unwrap(), JobStatus::Failure);
    }

    #[test]
    fn test_status_parse_rejects_other_values() {
        let err = "cancelled".parse::<JobStatus>().unwrap_err();
        assert!(matches!(err, NotifyError::InvalidStatus(ref s) if s == "cancelled"));

        assert!("".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_pipeline_type_parse() {
        assert_eq!(PipelineType::parse("deployment-pipeline"), PipelineType::Deployment);
        assert_eq!(PipelineType::parse("deployment"), PipelineType::Deployment);
        assert_eq!(PipelineType::parse("daily-pipeline"), PipelineType::Daily);
        assert_eq!(PipelineType::parse("daily"), PipelineType::Daily);
        assert_eq!(
            PipelineType::parse("weekly"),
            PipelineType::Unknown("weekly".to_string())
        );
        assert_eq!(PipelineType::parse(""), PipelineType::Unknown(String::new()));
    }
}
