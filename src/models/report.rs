use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome tier, classified from the raw score against configured
/// percentage thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    NeedsReview,
    NeedsPractice,
}

impl Tier {
    /// Banner text shown with the final score.
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent work! You are ready for the olympiad.",
            Tier::NeedsReview => "Good effort! Review the topics you missed and try again.",
            Tier::NeedsPractice => "Keep practicing. You need a bit more study time.",
        }
    }
}

/// Verdict for a single question. The correct answer and topic label are
/// revealed only when the selection was wrong.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionVerdict {
    pub question: String,
    pub selected: Option<String>,
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Derived grading result. Never stored; recomputed on every submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GradeReport {
    pub verdicts: Vec<QuestionVerdict>,
    pub raw_score: usize,
    pub total_questions: usize,
    pub percentage: f64,
    pub is_late: bool,
    pub tier: Tier,
}
