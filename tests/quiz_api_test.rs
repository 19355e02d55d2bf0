use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tokio::sync::RwLock;
use tower::ServiceExt;
use uuid::Uuid;

use quiz_backend::models::session::TestSession;
use quiz_backend::services::{
    bank_service::BankService, grading_service::GradingService, session_service::SessionService,
};
use quiz_backend::{routes, AppState};

fn write_question_file(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(format!("{}-{}.json", name, Uuid::new_v4()));
    std::fs::write(&path, contents).expect("write question file");
    path.to_string_lossy().into_owned()
}

fn sample_bank(n: usize) -> String {
    let questions: Vec<JsonValue> = (0..n)
        .map(|i| {
            json!({
                "question": format!("Question {}", i),
                "options": ["Alpha", "Beta", "Gamma"],
                "answer": "Alpha",
                "topic": "Science"
            })
        })
        .collect();
    serde_json::to_string(&questions).unwrap()
}

fn state_for(question_file: String, questions_per_test: usize) -> AppState {
    AppState {
        bank_service: BankService::new(question_file),
        session_service: SessionService::new(questions_per_test),
        grading_service: GradingService::new(30, 83.0, 50.0),
        session: Arc::new(RwLock::new(TestSession::empty())),
        duration_minutes: 30,
        questions_per_test,
    }
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::page::index))
        .route("/start", post(routes::page::start))
        .route("/submit", post(routes::page::submit))
        .route("/health", get(routes::health::health))
        .route("/api/quiz/start", post(routes::quiz::start_test))
        .route("/api/quiz/status", get(routes::quiz::get_status))
        .route("/api/quiz/submit", post(routes::quiz::submit_test))
        .with_state(state)
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn api_flow_end_to_end() {
    let path = write_question_file("flow", &sample_bank(6));
    let app = app(state_for(path.clone(), 4));

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quiz/start")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let started = body_json(resp).await;
    assert_eq!(started["total_questions"], 4);
    assert_eq!(started["duration_minutes"], 30);
    let questions = started["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 4);
    // The answer key must not be exposed to the client.
    assert!(questions.iter().all(|q| q.get("answer").is_none()));

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/quiz/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = body_json(resp).await;
    assert_eq!(status["active"], true);
    assert_eq!(status["total_questions"], 4);
    assert!(status["time_remaining_seconds"].as_i64().unwrap() > 0);

    // Every sampled question has answer "Alpha"; answer three of four.
    let submit = json!({
        "answers": [
            {"question_index": 0, "answer": "Alpha"},
            {"question_index": 1, "answer": "Beta"},
            {"question_index": 2, "answer": "Alpha"},
            {"question_index": 3, "answer": "Alpha"}
        ]
    });
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quiz/submit")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(submit.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let report = body_json(resp).await;
    assert_eq!(report["raw_score"], 3);
    assert_eq!(report["total_questions"], 4);
    assert_eq!(report["percentage"], 75.0);
    assert_eq!(report["is_late"], false);
    assert_eq!(report["tier"], "needs_review");

    let wrong = report["verdicts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["is_correct"] == false)
        .unwrap();
    assert_eq!(wrong["correct_answer"], "Alpha");
    assert_eq!(wrong["topic"], "Science");

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn load_errors_leave_the_session_untouched() {
    let missing = std::env::temp_dir()
        .join(format!("missing-{}.json", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    let state = state_for(missing.clone(), 3);

    // Seed an active session, then fail two starts against a broken source.
    {
        let bank: Vec<quiz_backend::models::question::Question> =
            serde_json::from_str(&sample_bank(3)).unwrap();
        let seeded = state.session_service.start_test(&bank).unwrap();
        *state.session.write().await = seeded;
    }
    let app = app(state.clone());

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quiz/start")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "source_not_found");

    std::fs::write(&missing, "{\"not\": \"a list\"}").unwrap();
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quiz/start")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(resp).await["error"], "malformed_source");

    // The seeded session survived both failures.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/quiz/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = body_json(resp).await;
    assert_eq!(status["active"], true);
    assert_eq!(status["total_questions"], 3);

    std::fs::remove_file(missing).ok();
}

#[tokio::test]
async fn empty_bank_does_not_start_a_test() {
    let path = write_question_file("empty", "[]");
    let app = app(state_for(path.clone(), 3));

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quiz/start")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(resp).await["error"], "empty_bank");

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn submitting_without_a_session_conflicts() {
    let path = write_question_file("nosession", &sample_bank(2));
    let app = app(state_for(path.clone(), 2));

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quiz/submit")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"answers": []}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(resp).await["error"], "empty_session");

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn restart_discards_the_prior_session() {
    let path = write_question_file("restart", &sample_bank(5));
    let app = app(state_for(path.clone(), 5));

    let start = |app: Router| async move {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/quiz/start")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        body_json(resp).await
    };

    let first = start(app.clone()).await;
    let second = start(app.clone()).await;
    assert_ne!(first["session_id"], second["session_id"]);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn html_flow_renders_form_and_report() {
    let path = write_question_file("html", &sample_bank(3));
    let app = app(state_for(path.clone(), 3));

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Start New Test"));

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/start")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let form = body_text(resp).await;
    assert!(form.contains(r#"name="q_0""#));
    assert!(form.contains("timer_display"));

    // Answer only the first question; the rest grade as no selection.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from("q_0=Alpha"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let report = body_text(resp).await;
    assert!(report.contains("Test Results"));
    assert!(report.contains("Raw Score: 1/3"));
    assert!(report.contains("33.3%"));
    assert!(report.contains("No answer selected."));

    std::fs::remove_file(path).ok();
}
