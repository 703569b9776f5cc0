//! Events flowing from the backend worker back to the UI thread.

use client_core::{Resolution, ServiceError};
use shared::domain::HealthStatus;

#[derive(Debug)]
pub enum UiEvent {
    Resolved(Resolution),
    Health(Result<HealthStatus, ServiceError>),
}

pub fn describe_health(health: &Result<HealthStatus, ServiceError>) -> String {
    match health {
        Ok(status) if status.is_healthy() => {
            let mut notes = Vec::new();
            if !status.models_loaded {
                notes.push("models not loaded");
            }
            if !status.mentor_data_loaded {
                notes.push("mentor data not loaded");
            }
            if notes.is_empty() {
                "Service healthy".to_string()
            } else {
                format!("Service up ({})", notes.join(", "))
            }
        }
        Ok(status) => format!("Service status: {}", status.status),
        Err(err) => format!("Service unreachable: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: &str, models_loaded: bool, mentor_data_loaded: bool) -> HealthStatus {
        HealthStatus {
            status: status.to_string(),
            models_loaded,
            mentor_data_loaded,
        }
    }

    #[test]
    fn healthy_service_with_everything_loaded() {
        assert_eq!(describe_health(&Ok(status("healthy", true, true))), "Service healthy");
    }

    #[test]
    fn healthy_service_notes_missing_data() {
        assert_eq!(
            describe_health(&Ok(status("healthy", true, false))),
            "Service up (mentor data not loaded)"
        );
    }

    #[test]
    fn other_status_is_reported_verbatim() {
        assert_eq!(
            describe_health(&Ok(status("degraded", false, false))),
            "Service status: degraded"
        );
    }

    #[test]
    fn unreachable_service() {
        let err = ServiceError::network("check_health", "connection refused");
        assert!(describe_health(&Err(err)).starts_with("Service unreachable"));
    }
}
