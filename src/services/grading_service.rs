use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};
use crate::models::report::{GradeReport, QuestionVerdict, Tier};
use crate::models::session::TestSession;

/// Grades a submission against the session's sampled questions.
#[derive(Clone)]
pub struct GradingService {
    duration_minutes: u32,
    excellent_threshold_pct: f64,
    review_threshold_pct: f64,
}

impl GradingService {
    pub fn new(
        duration_minutes: u32,
        excellent_threshold_pct: f64,
        review_threshold_pct: f64,
    ) -> Self {
        Self {
            duration_minutes,
            excellent_threshold_pct,
            review_threshold_pct,
        }
    }

    /// Pure given its inputs: a fixed (session, responses, graded_at) triple
    /// always yields the same report. `responses` is index-aligned with the
    /// session's questions; a missing or `None` entry counts as no selection
    /// and is scored incorrect. Lateness is advisory and never blocks
    /// grading.
    pub fn grade(
        &self,
        session: &TestSession,
        responses: &[Option<String>],
        graded_at: DateTime<Utc>,
    ) -> Result<GradeReport> {
        let total_questions = session.selected_questions.len();
        if total_questions == 0 {
            return Err(Error::EmptySession);
        }

        let mut verdicts = Vec::with_capacity(total_questions);
        let mut raw_score = 0usize;

        for (i, q) in session.selected_questions.iter().enumerate() {
            let selected = responses.get(i).cloned().flatten();
            let is_correct = selected.as_deref() == Some(q.answer.as_str());
            if is_correct {
                raw_score += 1;
            }
            verdicts.push(QuestionVerdict {
                question: q.question.clone(),
                selected,
                is_correct,
                correct_answer: (!is_correct).then(|| q.answer.clone()),
                topic: (!is_correct).then(|| q.topic.clone()),
            });
        }

        let percentage = (raw_score as f64 / total_questions as f64) * 100.0;
        let is_late = session
            .start_time
            .map(|started| graded_at - started > Duration::minutes(self.duration_minutes as i64))
            .unwrap_or(false);
        let tier = self.classify(percentage);

        Ok(GradeReport {
            verdicts,
            raw_score,
            total_questions,
            percentage,
            is_late,
            tier,
        })
    }

    fn classify(&self, percentage: f64) -> Tier {
        if percentage >= self.excellent_threshold_pct {
            Tier::Excellent
        } else if percentage >= self.review_threshold_pct {
            Tier::NeedsReview
        } else {
            Tier::NeedsPractice
        }
    }
}
