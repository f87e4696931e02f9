use crate::domain::{
    error::DomainError, models::activity::ParticipantEmail,
    repositories::activity_repository::ActivityRepository,
};

#[derive(Debug)]
pub struct UnregisterResult {
    /// The roster entry that was removed, in its stored casing.
    pub email: String,
    pub activity: String,
}

pub struct UnregisterUsecase<R: ActivityRepository> {
    activity_repository: R,
}

impl<R: ActivityRepository> UnregisterUsecase<R> {
    pub fn new(activity_repository: R) -> Self {
        Self {
            activity_repository,
        }
    }

    pub async fn unregister(
        &self,
        activity: String,
        email: String,
    ) -> Result<UnregisterResult, DomainError>
    where
        R: Send + Sync,
    {
        let email = ParticipantEmail::new(&email);
        let removed = self
            .activity_repository
            .unregister(&activity, &email)
            .await?;

        Ok(UnregisterResult {
            email: removed,
            activity,
        })
    }
}
