use super::*;

#[test]
fn classifies_transport_failures() {
    let err = UiError::from_message(
        UiErrorContext::NameCheck,
        "failed to check name availability: failed to reach directory: connection refused",
    );
    assert_eq!(err.category(), UiErrorCategory::Transport);
    assert_eq!(err.context(), UiErrorContext::NameCheck);
    assert!(!err.is_blocking());
}

#[test]
fn classifies_payload_failures_as_validation() {
    let err = UiError::from_directory(
        UiErrorContext::LoadLocations,
        &DirectoryError::LocationFetchFailed("invalid locations payload: eof".into()),
    );
    assert_eq!(err.category(), UiErrorCategory::Validation);
}

#[test]
fn startup_failures_are_blocking() {
    let err = UiError::from_message(UiErrorContext::BackendStartup, "failed to build runtime");
    assert!(err.is_blocking());
    assert_eq!(err.category(), UiErrorCategory::Unknown);
    assert!(describe_failure(&err).starts_with("Background worker failed to start"));
}

#[test]
fn describes_fail_open_lookups() {
    let err = UiError::from_message(UiErrorContext::NameCheck, "request timed out");
    assert_eq!(
        describe_failure(&err),
        "Network error checking the name; you can still add it: request timed out"
    );

    let err = UiError::from_message(UiErrorContext::LoadLocations, "boom");
    assert_eq!(
        describe_failure(&err),
        "Unexpected error loading locations; the list is empty: boom"
    );
}
