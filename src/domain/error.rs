use thiserror::Error;

/// Every failure is a well-formed rejection of a single request; the
/// `Display` text doubles as the HTTP error `detail` field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,
}
