//! Sequential multi-agent endpoint
//!
//! Runs a heterogeneous list of agent tasks one at a time and reports one
//! result entry per input item, in input order. Per-item failures are
//! captured as entries; they never abort the batch.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::futurehouse::{JobName, TaskRequest, TaskStatus};
use crate::sanitize::sanitize;
use crate::server::state::AppState;

use super::ApiError;

/// One entry in the batch results list.
///
/// Serializes untagged into the three wire shapes: a completed task, an item
/// rejected before submission, or a task that failed remotely.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Completed {
        agent: String,
        status: TaskStatus,
        answer: String,
    },
    Rejected {
        error: String,
        agent: Option<String>,
        question: Option<String>,
    },
    Failed {
        agent: String,
        error: String,
    },
}

/// Response body for /ask_multi
#[derive(Debug, Serialize)]
pub struct MultiResponse {
    pub results: Vec<BatchEntry>,
}

/// Run a list of agent tasks strictly sequentially.
///
/// The body is validated by hand rather than through a typed struct so a
/// missing or non-array `tasks` field yields the exact error message, and so
/// malformed items become per-item entries instead of failing the whole
/// request at deserialization.
pub async fn ask_multi(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<MultiResponse>, ApiError> {
    let tasks = match body.get("tasks").and_then(Value::as_array) {
        Some(tasks) => tasks,
        None => return Err(ApiError::bad_request("Missing or invalid tasks list")),
    };

    log::debug!("Running batch of {} tasks", tasks.len());

    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(run_batch_item(&state, task).await);
    }

    Ok(Json(MultiResponse { results }))
}

/// Run one batch item through the same flow as the single-agent endpoints,
/// converting every failure into a result entry.
async fn run_batch_item(state: &AppState, item: &Value) -> BatchEntry {
    let agent_raw = item.get("agent").and_then(Value::as_str);
    let question_raw = item.get("question").and_then(Value::as_str);

    let (agent, question) = match (
        agent_raw.filter(|s| !s.is_empty()),
        question_raw.filter(|s| !s.is_empty()),
    ) {
        (Some(agent), Some(question)) => (agent, question),
        _ => {
            return BatchEntry::Rejected {
                error: "Missing agent or question".to_string(),
                agent: agent_raw.map(str::to_string),
                question: question_raw.map(str::to_string),
            }
        }
    };

    let job = match agent.parse::<JobName>() {
        Ok(job) => job,
        Err(e) => {
            return BatchEntry::Failed {
                agent: agent.to_string(),
                error: e.to_string(),
            }
        }
    };

    match state
        .client
        .run_until_done(TaskRequest::new(job, question))
        .await
    {
        Ok(response) => match response.answer_text(job) {
            Some(answer) => BatchEntry::Completed {
                agent: agent.to_string(),
                status: response.status,
                answer: sanitize(answer),
            },
            None => BatchEntry::Failed {
                agent: agent.to_string(),
                error: format!("{} response carried no answer", job),
            },
        },
        Err(e) => {
            log::warn!("Batch task for agent '{}' failed: {}", agent, e);
            BatchEntry::Failed {
                agent: agent.to_string(),
                error: e.to_string(),
            }
        }
    }
}
