use thiserror::Error;

use super::types::ProjectSubmission;

/// Boundary check failures for a submission that must not reach the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("project name is required")]
    MissingName,

    #[error("project URL is required")]
    MissingUrl,
}

/// Check the preconditions the scoring engine relies on.
///
/// The engine itself never validates; callers run this first.
pub fn validate_submission(submission: &ProjectSubmission) -> Result<(), SubmissionError> {
    if submission.name.trim().is_empty() {
        return Err(SubmissionError::MissingName);
    }
    if submission.url.trim().is_empty() {
        return Err(SubmissionError::MissingUrl);
    }
    Ok(())
}
