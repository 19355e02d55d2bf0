use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::question::Question;
use crate::models::session::TestSession;

/// Question as exposed to a running test: the answer key and topic label
/// stay server-side until grading.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicQuestion {
    pub index: usize,
    pub question: String,
    pub options: Vec<String>,
}

impl PublicQuestion {
    pub fn from_indexed(index: usize, question: &Question) -> Self {
        Self {
            index,
            question: question.question.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StartTestResponse {
    pub session_id: uuid::Uuid,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: u32,
    pub total_questions: usize,
    pub questions: Vec<PublicQuestion>,
}

impl StartTestResponse {
    pub fn from_session(session: &TestSession, duration_minutes: u32) -> Self {
        Self {
            session_id: session.id,
            started_at: session.start_time.unwrap_or_else(chrono::Utc::now),
            duration_minutes,
            total_questions: session.selected_questions.len(),
            questions: session
                .selected_questions
                .iter()
                .enumerate()
                .map(|(i, q)| PublicQuestion::from_indexed(i, q))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitAnswer {
    pub question_index: usize,
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitTestRequest {
    #[validate(length(max = 500))]
    pub answers: Vec<SubmitAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub active: bool,
    pub total_questions: usize,
    pub time_remaining_seconds: Option<i64>,
}
