use crate::domain::{
    error::DomainError, models::activity::ParticipantEmail,
    repositories::activity_repository::ActivityRepository,
};

#[derive(Debug)]
pub struct SignupResult {
    /// The trimmed email as stored on the roster.
    pub email: String,
    pub activity: String,
}

pub struct SignupUsecase<R: ActivityRepository> {
    activity_repository: R,
}

impl<R: ActivityRepository> SignupUsecase<R> {
    pub fn new(activity_repository: R) -> Self {
        Self {
            activity_repository,
        }
    }

    pub async fn signup(&self, activity: String, email: String) -> Result<SignupResult, DomainError>
    where
        R: Send + Sync,
    {
        let email = ParticipantEmail::new(&email);
        self.activity_repository.signup(&activity, &email).await?;

        Ok(SignupResult {
            email: email.as_str().to_string(),
            activity,
        })
    }
}
