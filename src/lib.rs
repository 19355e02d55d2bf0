pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::session::TestSession;
use crate::services::{
    bank_service::BankService, grading_service::GradingService,
    session_service::SessionService,
};

#[derive(Clone)]
pub struct AppState {
    pub bank_service: BankService,
    pub session_service: SessionService,
    pub grading_service: GradingService,
    pub session: Arc<RwLock<TestSession>>,
    pub duration_minutes: u32,
    pub questions_per_test: usize,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();

        let bank_service = BankService::new(config.question_file.clone());
        let session_service = SessionService::new(config.questions_per_test);
        let grading_service = GradingService::new(
            config.test_duration_minutes,
            config.excellent_threshold_pct,
            config.review_threshold_pct,
        );

        Self {
            bank_service,
            session_service,
            grading_service,
            session: Arc::new(RwLock::new(TestSession::empty())),
            duration_minutes: config.test_duration_minutes,
            questions_per_test: config.questions_per_test,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
