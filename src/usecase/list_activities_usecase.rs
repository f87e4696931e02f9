use std::collections::BTreeMap;

use crate::domain::{
    models::activity::Activity, repositories::activity_repository::ActivityRepository,
};

pub struct ListActivitiesUsecase<R: ActivityRepository> {
    activity_repository: R,
}

impl<R: ActivityRepository> ListActivitiesUsecase<R> {
    pub fn new(activity_repository: R) -> Self {
        Self {
            activity_repository,
        }
    }

    /// Current state of the whole catalog. Read-only, cannot fail.
    pub async fn list(&self) -> BTreeMap<String, Activity>
    where
        R: Send + Sync,
    {
        self.activity_repository.list().await
    }
}
