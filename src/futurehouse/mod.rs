//! Client for the FutureHouse research-agent task API
//!
//! Submits agent jobs and polls them until they reach a terminal state. One
//! authenticated client is constructed at process start and shared read-only
//! across all requests.

pub mod models;

pub use models::{JobName, TaskRequest, TaskResponse, TaskStatus};

use serde::Deserialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "https://api.futurehouse.org";

/// Cadence of status polls while a task is in flight
const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Overall deadline for a single submit-and-wait call
const POLL_TIMEOUT: Duration = Duration::from_secs(600);

/// Errors surfaced by the FutureHouse client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unrecognized agent job name: {0}")]
    UnknownJob(String),

    #[error("FutureHouse request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FutureHouse API error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Task {task_id} did not reach a terminal state within {timeout_secs}s")]
    Timeout { task_id: Uuid, timeout_secs: u64 },
}

/// Body returned by the task creation endpoint
#[derive(Debug, Deserialize)]
struct CreatedTask {
    task_id: Uuid,
}

/// FutureHouse task API client
pub struct FutureHouseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl FutureHouseClient {
    /// Create a client against the default API endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            poll_interval: POLL_INTERVAL,
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Point the client at a different API endpoint (staging deployments).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Submit a task, returning the id assigned by the service.
    pub async fn create_task(&self, request: &TaskRequest) -> Result<Uuid, ClientError> {
        let url = format!("{}/v1/tasks", self.base_url);
        log::debug!("Submitting {} task to {}", request.name, url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("User-Agent", "fh-gateway")
            .json(request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let created: CreatedTask = response.json().await?;
        Ok(created.task_id)
    }

    /// Fetch the current state of a task.
    pub async fn fetch_task(&self, task_id: Uuid) -> Result<TaskResponse, ClientError> {
        let url = format!("{}/v1/tasks/{}", self.base_url, task_id);

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("User-Agent", "fh-gateway")
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Submit a task and poll until it reaches a terminal state.
    ///
    /// The caller's future stays suspended for the whole wait; the only bound
    /// on it is the client's own poll deadline.
    pub async fn run_until_done(&self, request: TaskRequest) -> Result<TaskResponse, ClientError> {
        let job = request.name;
        let task_id = self.create_task(&request).await?;
        let deadline = Instant::now() + self.poll_timeout;

        loop {
            let response = self.fetch_task(task_id).await?;
            if response.status.is_terminal() {
                log::info!("{} task {} finished: {}", job, task_id, response.status);
                return Ok(response);
            }
            if Instant::now() >= deadline {
                return Err(ClientError::Timeout {
                    task_id,
                    timeout_secs: self.poll_timeout.as_secs(),
                });
            }
            log::trace!("{} task {} still {}", job, task_id, response.status);
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Api { status, message })
    }
}
