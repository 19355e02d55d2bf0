use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One multiple-choice question as stored in the question file.
///
/// The loader deserializes records as-is; option uniqueness and answer
/// membership are data-quality expectations of the file, not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default = "default_topic")]
    pub topic: String,
}

fn default_topic() -> String {
    "General".to_string()
}
