use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Email address identifying a student on a roster.
///
/// Surrounding whitespace is removed on construction; comparisons against
/// stored roster entries are case-insensitive, but the trimmed original
/// casing is what gets stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against a stored roster entry.
    pub fn matches(&self, entry: &str) -> bool {
        self.0.eq_ignore_ascii_case(entry)
    }
}

/// An extracurricular offering. The catalog key is the activity name;
/// `participants` is the only field that ever changes after seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    description: String,
    schedule: String,
    max_participants: usize,
    participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed constructor for the startup catalog.
    pub fn with_participants(
        description: &str,
        schedule: &str,
        max_participants: usize,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn max_participants(&self) -> usize {
        self.max_participants
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    /// Add a student to the roster. Duplicate registration is checked before
    /// capacity so a student already on a full roster still gets the
    /// duplicate rejection.
    pub fn signup(&mut self, email: &ParticipantEmail) -> Result<(), DomainError> {
        if self.participants.iter().any(|entry| email.matches(entry)) {
            return Err(DomainError::AlreadySignedUp);
        }
        if self.is_full() {
            return Err(DomainError::ActivityFull);
        }
        self.participants.push(email.as_str().to_string());
        Ok(())
    }

    /// Remove a student from the roster, returning the stored entry.
    pub fn unregister(&mut self, email: &ParticipantEmail) -> Result<String, DomainError> {
        let index = self
            .participants
            .iter()
            .position(|entry| email.matches(entry))
            .ok_or(DomainError::ParticipantNotFound)?;
        Ok(self.participants.remove(index))
    }
}
