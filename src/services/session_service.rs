use chrono::Utc;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::models::session::TestSession;

/// Builds fresh test sessions by sampling the loaded bank.
#[derive(Clone)]
pub struct SessionService {
    questions_per_test: usize,
}

impl SessionService {
    pub fn new(questions_per_test: usize) -> Self {
        Self { questions_per_test }
    }

    /// Samples `min(questions_per_test, bank.len())` distinct questions
    /// uniformly without replacement and stamps the start time. The caller
    /// stores the returned session, overwriting whatever came before it.
    pub fn start_test(&self, bank: &[Question]) -> Result<TestSession> {
        if bank.is_empty() {
            return Err(Error::EmptyBank);
        }

        let count = self.questions_per_test.min(bank.len());
        let mut rng = rand::thread_rng();
        let selected: Vec<Question> = bank.choose_multiple(&mut rng, count).cloned().collect();

        Ok(TestSession::started(selected, Utc::now()))
    }
}
