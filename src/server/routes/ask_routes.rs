//! Single-agent question endpoints
//!
//! Each route binds one fixed job kind; the shared flow validates the
//! question, runs the job to completion on the remote service, selects the
//! kind's answer field, and returns the sanitized text.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::futurehouse::{JobName, TaskRequest, TaskStatus};
use crate::sanitize::sanitize;
use crate::server::state::AppState;

use super::ApiError;

/// Request body for the ask endpoints
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Response body for the ask endpoints: exactly status + answer
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub status: TaskStatus,
    pub answer: String,
}

pub async fn ask_crow(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    ask_agent(&state, JobName::Crow, request).await
}

pub async fn ask_falcon(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    ask_agent(&state, JobName::Falcon, request).await
}

pub async fn ask_phoenix(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    ask_agent(&state, JobName::Phoenix, request).await
}

pub async fn ask_owl(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    ask_agent(&state, JobName::Owl, request).await
}

/// Shared flow behind the four ask endpoints.
///
/// The await on `run_until_done` holds this request open until the remote job
/// reaches a terminal state.
async fn ask_agent(
    state: &AppState,
    job: JobName,
    request: AskRequest,
) -> Result<Json<AskResponse>, ApiError> {
    let question = match request.question {
        Some(question) if !question.is_empty() => question,
        _ => return Err(ApiError::bad_request("Missing question")),
    };

    log::debug!("Running {} task", job);

    let response = state
        .client
        .run_until_done(TaskRequest::new(job, question))
        .await
        .map_err(|e| {
            log::warn!("{} task failed: {}", job, e);
            ApiError::bad_gateway(e.to_string())
        })?;

    let answer = response
        .answer_text(job)
        .ok_or_else(|| ApiError::bad_gateway(format!("{} response carried no answer", job)))?;

    Ok(Json(AskResponse {
        status: response.status,
        answer: sanitize(answer),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::futurehouse::FutureHouseClient;
    use crate::shutdown::ShutdownState;
    use axum::http::StatusCode;

    fn test_state() -> AppState {
        AppState::new(FutureHouseClient::new("test-key"), ShutdownState::new())
    }

    #[tokio::test]
    async fn test_missing_question_is_rejected() {
        let state = test_state();
        let err = ask_agent(&state, JobName::Crow, AskRequest { question: None })
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Missing question");
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected() {
        let state = test_state();
        let request = AskRequest {
            question: Some(String::new()),
        };
        let err = ask_agent(&state, JobName::Phoenix, request)
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Missing question");
    }

    #[test]
    fn test_ask_request_tolerates_missing_field() {
        let request: AskRequest = serde_json::from_str("{}").unwrap();
        assert!(request.question.is_none());
    }

    #[test]
    fn test_ask_response_has_exactly_two_keys() {
        let response = AskResponse {
            status: TaskStatus::Success,
            answer: "it depends".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["status"], "success");
        assert_eq!(object["answer"], "it depends");
    }
}
