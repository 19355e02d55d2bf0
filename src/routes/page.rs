use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use std::collections::HashMap;

use crate::error::Result;
use crate::views::pages;
use crate::AppState;

/// Landing page: the welcome screen, or the active test form with the
/// countdown widget.
#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read().await;
    if session.active {
        Html(pages::render_test(&session, state.duration_minutes))
    } else {
        Html(pages::render_welcome(
            state.duration_minutes,
            state.questions_per_test,
        ))
    }
}

/// Form action behind the "Start New Test" button. Load failures are
/// rendered as an error page; the existing session is left untouched when
/// the bank cannot be loaded.
#[axum::debug_handler]
pub async fn start(State(state): State<AppState>) -> Response {
    match start_inner(&state).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => {
            tracing::warn!("Failed to start test: {}", e);
            Html(pages::render_error(&e)).into_response()
        }
    }
}

async fn start_inner(state: &AppState) -> Result<()> {
    let bank = state.bank_service.load().await?;
    let session = state.session_service.start_test(&bank)?;
    tracing::info!(
        "Started test session {} with {} of {} questions",
        session.id,
        session.selected_questions.len(),
        bank.len()
    );
    *state.session.write().await = session;
    Ok(())
}

/// Form action behind "Submit Test". Radio groups are named `q_{index}`;
/// an unanswered question has no field at all and grades as no selection.
#[axum::debug_handler]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let session = state.session.read().await.clone();
    let responses: Vec<Option<String>> = (0..session.selected_questions.len())
        .map(|i| form.get(&format!("q_{}", i)).cloned())
        .collect();

    match state
        .grading_service
        .grade(&session, &responses, Utc::now())
    {
        Ok(report) => {
            tracing::info!(
                "Graded session {}: {}/{} ({:.1}%), late: {}",
                session.id,
                report.raw_score,
                report.total_questions,
                report.percentage,
                report.is_late
            );
            Html(pages::render_report(&report)).into_response()
        }
        Err(e) => Html(pages::render_error(&e)).into_response(),
    }
}
