use async_trait::async_trait;
use pagination::PageRequest;
use uuid::Uuid;

use crate::error::ProfileResult;
use crate::models::Profile;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> ProfileResult<Option<Profile>>;

    /// One page of profiles, filtered by `text` when given
    async fn search(&self, text: Option<String>, page: PageRequest) -> ProfileResult<Vec<Profile>>;

    async fn create(&self, profile: Profile) -> ProfileResult<Profile>;

    /// Full replace; `NotFound` when the id is absent
    async fn update(&self, profile: Profile) -> ProfileResult<Profile>;

    async fn delete(&self, id: Uuid) -> ProfileResult<()>;
}
