use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_markers(&mut errors, "scoring.paas_markers", &config.paas_markers);
    check_markers(&mut errors, "scoring.alt_host_markers", &config.alt_host_markers);
    check_markers(&mut errors, "scoring.low_effort_names", &config.low_effort_names);

    if config.min_name_length == Some(0) {
        errors.push("scoring.min_name_length: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// An empty marker is a substring of every URL or name
fn check_markers(errors: &mut Vec<String>, field: &str, markers: &Option<Vec<String>>) {
    if let Some(markers) = markers {
        for (i, marker) in markers.iter().enumerate() {
            if marker.trim().is_empty() {
                errors.push(format!("{}[{}]: marker must not be empty", field, i));
            }
        }
    }
}
