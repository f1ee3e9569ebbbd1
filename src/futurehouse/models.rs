//! Wire types for the FutureHouse task API

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ClientError;

/// Agent job kinds offered by the FutureHouse platform.
///
/// The set is fixed by the remote service; anything else is rejected when the
/// name is parsed at the client boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobName {
    /// Concise literature search
    Crow,
    /// Deep literature review
    Falcon,
    /// Chemistry tasks
    Phoenix,
    /// Precedent search
    Owl,
}

impl JobName {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobName::Crow => "crow",
            JobName::Falcon => "falcon",
            JobName::Phoenix => "phoenix",
            JobName::Owl => "owl",
        }
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobName {
    type Err = ClientError;

    /// Parse a job name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "crow" => Ok(JobName::Crow),
            "falcon" => Ok(JobName::Falcon),
            "phoenix" => Ok(JobName::Phoenix),
            "owl" => Ok(JobName::Owl),
            _ => Err(ClientError::UnknownJob(s.to_string())),
        }
    }
}

/// One question bound for one agent job kind.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRequest {
    pub name: JobName,
    pub query: String,
}

impl TaskRequest {
    pub fn new(name: JobName, query: impl Into<String>) -> Self {
        Self {
            name,
            query: query.into(),
        }
    }
}

/// Lifecycle states reported by the task API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Queued,
    Running,
    Success,
    Fail,
    Cancelled,
}

impl TaskStatus {
    /// Whether the remote job has stopped moving.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Success | TaskStatus::Fail | TaskStatus::Cancelled
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Queued => "queued",
            TaskStatus::Running => "running",
            TaskStatus::Success => "success",
            TaskStatus::Fail => "fail",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a submitted task as reported by the API.
///
/// Only `status` and one of the answer fields are ever consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task_id: Uuid,
    pub status: TaskStatus,
    /// Raw answer text; the field phoenix jobs report in.
    #[serde(default)]
    pub answer: Option<String>,
    /// Citation-formatted answer produced by the literature jobs.
    #[serde(default)]
    pub formatted_answer: Option<String>,
}

impl TaskResponse {
    /// Select the answer field for the given job kind.
    ///
    /// Phoenix reports in `answer`; the other kinds report in
    /// `formatted_answer` and fall back to `answer` when it is absent.
    pub fn answer_text(&self, job: JobName) -> Option<&str> {
        match job {
            JobName::Phoenix => self.answer.as_deref(),
            _ => self.formatted_answer.as_deref().or(self.answer.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(answer: Option<&str>, formatted: Option<&str>) -> TaskResponse {
        TaskResponse {
            task_id: Uuid::nil(),
            status: TaskStatus::Success,
            answer: answer.map(str::to_string),
            formatted_answer: formatted.map(str::to_string),
        }
    }

    #[test]
    fn test_job_name_parse_case_insensitive() {
        assert_eq!("crow".parse::<JobName>().unwrap(), JobName::Crow);
        assert_eq!("Phoenix".parse::<JobName>().unwrap(), JobName::Phoenix);
        assert_eq!("OWL".parse::<JobName>().unwrap(), JobName::Owl);
        assert_eq!("fAlCoN".parse::<JobName>().unwrap(), JobName::Falcon);
    }

    #[test]
    fn test_job_name_parse_unknown() {
        let err = "eagle".parse::<JobName>().unwrap_err();
        assert!(err.to_string().contains("eagle"));
    }

    #[test]
    fn test_job_name_round_trip() {
        for job in [JobName::Crow, JobName::Falcon, JobName::Phoenix, JobName::Owl] {
            assert_eq!(job.as_str().parse::<JobName>().unwrap(), job);
        }
    }

    #[test]
    fn test_task_request_serializes_lowercase_name() {
        let request = TaskRequest::new(JobName::Falcon, "why is the sky blue?");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["name"], "falcon");
        assert_eq!(value["query"], "why is the sky blue?");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!TaskStatus::Queued.is_terminal());
        assert!(!TaskStatus::Running.is_terminal());
        assert!(TaskStatus::Success.is_terminal());
        assert!(TaskStatus::Fail.is_terminal());
        assert!(TaskStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_phoenix_reads_answer_field() {
        let resp = response(Some("raw"), Some("formatted"));
        assert_eq!(resp.answer_text(JobName::Phoenix), Some("raw"));
    }

    #[test]
    fn test_other_kinds_read_formatted_answer() {
        let resp = response(Some("raw"), Some("formatted"));
        for job in [JobName::Crow, JobName::Falcon, JobName::Owl] {
            assert_eq!(resp.answer_text(job), Some("formatted"));
        }
    }

    #[test]
    fn test_formatted_answer_falls_back_to_answer() {
        let resp = response(Some("raw"), None);
        assert_eq!(resp.answer_text(JobName::Crow), Some("raw"));
    }

    #[test]
    fn test_missing_answer_is_none() {
        let resp = response(None, None);
        assert_eq!(resp.answer_text(JobName::Phoenix), None);
        assert_eq!(resp.answer_text(JobName::Crow), None);
    }

    #[test]
    fn test_task_response_deserializes_without_answer_fields() {
        let json = r#"{
            "task_id": "4a6f3c1e-8b2d-4f5a-9c7e-1d2b3a4c5d6e",
            "status": "running"
        }"#;

        let resp: TaskResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, TaskStatus::Running);
        assert!(resp.answer.is_none());
        assert!(resp.formatted_answer.is_none());
    }
}
