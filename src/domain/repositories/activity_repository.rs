use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{
    error::DomainError,
    models::activity::{Activity, ParticipantEmail},
};

/// Store of activities and their rosters. Implementations must make each
/// operation atomic: the duplicate/capacity checks and the mutation they
/// guard happen under one critical section.
#[async_trait]
pub trait ActivityRepository {
    /// Snapshot of the full catalog, name → record.
    async fn list(&self) -> BTreeMap<String, Activity>;

    async fn signup(&self, activity: &str, email: &ParticipantEmail) -> Result<(), DomainError>;

    /// Returns the stored roster entry that was removed.
    async fn unregister(
        &self,
        activity: &str,
        email: &ParticipantEmail,
    ) -> Result<String, DomainError>;
}
