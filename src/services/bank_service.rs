use crate::error::{Error, Result};
use crate::models::question::Question;

/// Reads the question bank from the configured JSON file.
///
/// Every `load` re-reads the file; the bank is only held in memory for the
/// lifetime of a single test session snapshot.
#[derive(Clone)]
pub struct BankService {
    question_file: String,
}

impl BankService {
    pub fn new(question_file: String) -> Self {
        Self { question_file }
    }

    pub fn question_file(&self) -> &str {
        &self.question_file
    }

    /// Loads the full bank. A missing file maps to `SourceNotFound`; any
    /// parse failure, including a non-list top level, maps to
    /// `MalformedSource`. Individual records are not validated beyond
    /// deserialization.
    pub async fn load(&self) -> Result<Vec<Question>> {
        let raw = match tokio::fs::read_to_string(&self.question_file).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::SourceNotFound(self.question_file.clone()));
            }
            Err(e) => return Err(Error::Io(e)),
        };

        serde_json::from_str::<Vec<Question>>(&raw)
            .map_err(|e| Error::MalformedSource(self.question_file.clone(), e.to_string()))
    }
}
