//! Profile Service - id generation and validation

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProfileError, ProfileResult};
use crate::models::{Profile, ProfileInput, ProfileQuery};
use crate::repository::ProfileRepository;

pub struct ProfileService<R: ProfileRepository> {
    repository: Arc<R>,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_profile(&self, id: Uuid) -> ProfileResult<Option<Profile>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn search_profiles(&self, query: &ProfileQuery) -> ProfileResult<Vec<Profile>> {
        self.repository
            .search(query.text().map(str::to_string), query.page_request())
            .await
    }

    /// Store a new profile under a freshly generated v4 UUID
    #[instrument(skip(self, input))]
    pub async fn create_profile(&self, input: ProfileInput) -> ProfileResult<Profile> {
        Self::validate(&input)?;
        self.repository
            .create(Profile::from_input(Uuid::new_v4(), input))
            .await
    }

    #[instrument(skip(self, input))]
    pub async fn update_profile(&self, id: Uuid, input: ProfileInput) -> ProfileResult<Profile> {
        Self::validate(&input)?;
        self.repository.update(Profile::from_input(id, input)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_profile(&self, id: Uuid) -> ProfileResult<()> {
        self.repository.delete(id).await
    }

    fn validate(input: &ProfileInput) -> ProfileResult<()> {
        input
            .validate()
            .map_err(|e| ProfileError::Validation(e.to_string()))
    }
}

impl<R: ProfileRepository> Clone for ProfileService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProfileRepository;
    use mockall::predicate::eq;

    fn input() -> ProfileInput {
        ProfileInput {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            age: 34,
            address: "12 Harbour Road".into(),
        }
    }

    #[tokio::test]
    async fn test_create_generates_v4_id() {
        let mut mock = MockProfileRepository::new();
        mock.expect_create()
            .withf(|p| p.id.get_version_num() == 4 && p.first_name == "Jane")
            .times(1)
            .returning(Ok);

        let service = ProfileService::new(mock);
        let created = service.create_profile(input()).await.unwrap();
        assert!(!created.id.is_nil());
    }

    #[tokio::test]
    async fn test_create_empty_first_name_fails() {
        let mut mock = MockProfileRepository::new();
        mock.expect_create().never();

        let mut invalid = input();
        invalid.first_name = String::new();

        let service = ProfileService::new(mock);
        assert!(matches!(
            service.create_profile(invalid).await,
            Err(ProfileError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_search_passes_text_and_clamped_page() {
        let mut mock = MockProfileRepository::new();
        mock.expect_search()
            .withf(|text, page| text.as_deref() == Some("Doe") && page.size == 10 && page.page == 1)
            .returning(|_, _| Ok(Vec::new()));

        let service = ProfileService::new(mock);
        let query = ProfileQuery {
            query: Some("Doe".into()),
            page: 1,
            page_size: Some(50),
        };
        assert!(service.search_profiles(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_uses_given_id() {
        let id = Uuid::new_v4();
        let mut mock = MockProfileRepository::new();
        mock.expect_update()
            .withf(move |p| p.id == id)
            .returning(Ok);

        let service = ProfileService::new(mock);
        assert_eq!(service.update_profile(id, input()).await.unwrap().id, id);
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let id = Uuid::new_v4();
        let mut mock = MockProfileRepository::new();
        mock.expect_delete()
            .with(eq(id))
            .returning(|id| Err(ProfileError::NotFound(id)));

        let service = ProfileService::new(mock);
        assert!(matches!(
            service.delete_profile(id).await,
            Err(ProfileError::NotFound(missing)) if missing == id
        ));
    }
}
