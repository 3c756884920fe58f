pub mod types;
pub mod validation;

pub use types::{load_submissions, ProjectSubmission, ScoredProject, SubmissionFile};
pub use validation::{validate_submission, SubmissionError};
