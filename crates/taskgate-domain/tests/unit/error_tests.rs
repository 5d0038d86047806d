//! Unit tests for domain error types

use taskgate_domain::{DeletableKind, Error};

#[test]
fn test_not_found_error() {
    let error = Error::not_found("Task 7");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "Task 7"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_deletion_blocked_displays_reason_only() {
    let error = Error::deletion_blocked(DeletableKind::TaskStatus.blocked_reason());
    assert_eq!(error.to_string(), "TaskStatus has associated tasks");
}

#[test]
fn test_blocked_reason_per_kind() {
    assert_eq!(
        DeletableKind::User.blocked_reason(),
        "User has associated tasks"
    );
    assert_eq!(
        DeletableKind::Label.blocked_reason(),
        "Label has associated tasks"
    );
}

#[test]
fn test_authentication_failure_classification() {
    assert!(Error::CredentialMismatch.is_authentication_failure());
    assert!(Error::subject_not_found("a@b.c").is_authentication_failure());
    assert!(!Error::TokenExpired.is_authentication_failure());
    assert!(!Error::AuthorizationDenied.is_authentication_failure());
}

#[test]
fn test_token_error_classification() {
    assert!(Error::TokenMalformed.is_token_error());
    assert!(Error::TokenBadSignature.is_token_error());
    assert!(Error::TokenExpired.is_token_error());
    assert!(!Error::CredentialMismatch.is_token_error());
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("Failed to read config", io);
    assert!(std::error::Error::source(&error).is_some());
    assert!(error.to_string().contains("Failed to read config"));
}
