use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use crate::gallery::Gallery;
use crate::scoring::RollSource;
use crate::submission::{validate_submission, ProjectSubmission, SubmissionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted { id: String, score: u8 },
    /// The cancel signal fired during the wait; the gallery is unchanged
    Cancelled,
}

/// Run one submission through the builder flow: validate, wait out the
/// simulated latency, then score and append to the gallery.
///
/// The wait races `cancel`; whichever finishes first decides the outcome.
/// Pass `std::future::pending()` for a wait that cannot be cancelled.
pub async fn submit_project<R, C>(
    gallery: &mut Gallery,
    submission: ProjectSubmission,
    roll: &mut R,
    delay: Duration,
    cancel: C,
) -> Result<SubmitOutcome, SubmissionError>
where
    R: RollSource + ?Sized,
    C: Future<Output = ()>,
{
    validate_submission(&submission)?;

    debug!(name = %submission.name, delay = ?delay, "submitting project");

    tokio::select! {
        _ = tokio::time::sleep(delay) => {}
        _ = cancel => {
            warn!(name = %submission.name, "submission cancelled before scoring");
            return Ok(SubmitOutcome::Cancelled);
        }
    }

    let project = gallery.add(submission, roll);
    Ok(SubmitOutcome::Submitted {
        id: project.id().to_string(),
        score: project.score(),
    })
}
