use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    error::DomainError,
    models::activity::{Activity, ParticipantEmail},
    repositories::activity_repository::ActivityRepository,
};

/// Process-lifetime activity store. One mutex guards the whole catalog so
/// each check-then-act sequence is atomic even when the server dispatches
/// requests in parallel; nothing awaits while the lock is held.
#[derive(Clone)]
pub struct InMemoryActivityRepository {
    activities: Arc<Mutex<BTreeMap<String, Activity>>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::from_catalog(BTreeMap::new())
    }

    pub fn from_catalog(catalog: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Add an activity to the catalog. Used at bootstrap only; activities
    /// are never created through the HTTP surface.
    pub async fn insert(&self, name: &str, activity: Activity) {
        self.activities
            .lock()
            .await
            .insert(name.to_string(), activity);
    }
}

impl Default for InMemoryActivityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn list(&self) -> BTreeMap<String, Activity> {
        self.activities.lock().await.clone()
    }

    async fn signup(&self, activity: &str, email: &ParticipantEmail) -> Result<(), DomainError> {
        let mut activities = self.activities.lock().await;
        let record = activities
            .get_mut(activity)
            .ok_or(DomainError::ActivityNotFound)?;
        record.signup(email)
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &ParticipantEmail,
    ) -> Result<String, DomainError> {
        let mut activities = self.activities.lock().await;
        let record = activities
            .get_mut(activity)
            .ok_or(DomainError::ActivityNotFound)?;
        record.unregister(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> Activity {
        Activity::new("Learn strategies and compete in chess tournaments", "Fridays", 12)
    }

    #[tokio::test]
    async fn signup_unknown_activity_fails() {
        let repo = InMemoryActivityRepository::new();
        let err = repo
            .signup("Chess Club", &ParticipantEmail::new("a@b.edu"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::ActivityNotFound);
    }

    #[tokio::test]
    async fn unregister_unknown_activity_fails() {
        let repo = InMemoryActivityRepository::new();
        let err = repo
            .unregister("Chess Club", &ParticipantEmail::new("a@b.edu"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::ActivityNotFound);
    }

    #[tokio::test]
    async fn signup_and_unregister_cycle() {
        let repo = InMemoryActivityRepository::new();
        repo.insert("Chess Club", chess_club()).await;
        let email = ParticipantEmail::new("a@b.edu");

        repo.signup("Chess Club", &email).await.unwrap();
        assert_eq!(repo.list().await["Chess Club"].participants(), ["a@b.edu"]);

        let err = repo.signup("Chess Club", &email).await.unwrap_err();
        assert_eq!(err, DomainError::AlreadySignedUp);

        let removed = repo.unregister("Chess Club", &email).await.unwrap();
        assert_eq!(removed, "a@b.edu");
        assert!(repo.list().await["Chess Club"].participants().is_empty());

        let err = repo.unregister("Chess Club", &email).await.unwrap_err();
        assert_eq!(err, DomainError::ParticipantNotFound);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_signups_lose_no_writes() {
        let repo = InMemoryActivityRepository::new();
        repo.insert("Robotics Club", chess_club()).await;

        let emails = ["multi1@b.edu", "multi2@b.edu", "multi3@b.edu"];
        let mut handles = Vec::new();
        for email in emails {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.signup("Robotics Club", &ParticipantEmail::new(email))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let roster = repo.list().await["Robotics Club"].participants().to_vec();
        assert_eq!(roster.len(), 3);
        for email in emails {
            assert!(roster.iter().any(|entry| entry == email));
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_duplicate_signups_admit_exactly_one() {
        let repo = InMemoryActivityRepository::new();
        repo.insert("Chess Club", chess_club()).await;

        let mut handles = Vec::new();
        for _ in 0..4 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.signup("Chess Club", &ParticipantEmail::new("same@b.edu"))
                    .await
            }));
        }
        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(repo.list().await["Chess Club"].participants().len(), 1);
    }
}
