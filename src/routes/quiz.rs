use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use validator::Validate;

use crate::dto::quiz_dto::{StartTestResponse, StatusResponse, SubmitTestRequest};
use crate::models::report::GradeReport;
use crate::models::session::TestSession;
use crate::AppState;

/// Starts a fresh test: reloads the bank, samples a subset, and overwrites
/// any prior session. In-flight answers from the old session are discarded.
#[utoipa::path(
    post,
    path = "/api/quiz/start",
    responses(
        (status = 200, description = "Test started", body = StartTestResponse),
        (status = 404, description = "Question file not found"),
        (status = 422, description = "Question file malformed or empty")
    )
)]
#[axum::debug_handler]
pub async fn start_test(State(state): State<AppState>) -> crate::error::Result<Response> {
    let bank = state.bank_service.load().await.map_err(|e| {
        tracing::warn!("Failed to load question bank: {}", e);
        e
    })?;

    let session = state.session_service.start_test(&bank)?;
    tracing::info!(
        "Started test session {} with {} of {} questions",
        session.id,
        session.selected_questions.len(),
        bank.len()
    );

    let response = StartTestResponse::from_session(&session, state.duration_minutes);
    *state.session.write().await = session;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/quiz/status",
    responses(
        (status = 200, description = "Current session status", body = StatusResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_status(State(state): State<AppState>) -> crate::error::Result<Response> {
    let session = state.session.read().await;
    let response = StatusResponse {
        active: session.active,
        total_questions: session.selected_questions.len(),
        time_remaining_seconds: session.remaining_seconds(state.duration_minutes, Utc::now()),
    };
    Ok(Json(response).into_response())
}

/// Grades the submitted answers against the active session. Submissions
/// after the countdown has elapsed are still graded; the report only carries
/// a lateness flag.
#[utoipa::path(
    post,
    path = "/api/quiz/submit",
    request_body = SubmitTestRequest,
    responses(
        (status = 200, description = "Graded report", body = GradeReport),
        (status = 409, description = "No active session to grade")
    )
)]
#[axum::debug_handler]
pub async fn submit_test(
    State(state): State<AppState>,
    Json(req): Json<SubmitTestRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;

    let session = state.session.read().await.clone();
    let responses = align_responses(&session, &req);
    let report = state
        .grading_service
        .grade(&session, &responses, Utc::now())?;

    tracing::info!(
        "Graded session {}: {}/{} ({:.1}%), late: {}",
        session.id,
        report.raw_score,
        report.total_questions,
        report.percentage,
        report.is_late
    );

    Ok(Json(report).into_response())
}

/// Index-aligns the submitted answers with the session's questions. Answers
/// for unknown indices are ignored; unanswered questions stay `None`.
fn align_responses(session: &TestSession, req: &SubmitTestRequest) -> Vec<Option<String>> {
    let mut responses = vec![None; session.selected_questions.len()];
    for answer in &req.answers {
        if let Some(slot) = responses.get_mut(answer.question_index) {
            *slot = Some(answer.answer.clone());
        }
    }
    responses
}
