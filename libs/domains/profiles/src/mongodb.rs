//! MongoDB implementation of ProfileRepository

use async_trait::async_trait;
use database::mongodb::is_duplicate_key;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
    options::FindOptions,
};
use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProfileError, ProfileResult};
use crate::models::Profile;
use crate::repository::ProfileRepository;

pub const PROFILE_COLLECTION: &str = "profile";

/// Stored profile; the UUID is kept in `_id` in its hyphenated text form
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    age: u8,
    #[serde(default)]
    address: String,
}

impl From<Profile> for ProfileDocument {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            age: profile.age,
            address: profile.address,
        }
    }
}

impl TryFrom<ProfileDocument> for Profile {
    type Error = ProfileError;

    fn try_from(doc: ProfileDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&doc.id)
            .map_err(|e| ProfileError::Database(format!("stored id '{}': {}", doc.id, e)))?;

        Ok(Self {
            id,
            first_name: doc.first_name,
            last_name: doc.last_name,
            age: doc.age,
            address: doc.address,
        })
    }
}

pub struct MongoProfileRepository {
    collection: Collection<ProfileDocument>,
}

impl MongoProfileRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(PROFILE_COLLECTION),
        }
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": id.to_string() }
    }

    /// Literal, case-sensitive substring match on name or address
    fn search_filter(text: Option<&str>) -> Document {
        let Some(text) = text else {
            return doc! {};
        };
        let pattern = regex::escape(text);

        doc! {
            "$or": [
                { "firstName": { "$regex": pattern.as_str() } },
                { "lastName": { "$regex": pattern.as_str() } },
                { "address": { "$regex": pattern.as_str() } },
            ]
        }
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProfileResult<Option<Profile>> {
        self.collection
            .find_one(Self::id_filter(id))
            .await?
            .map(Profile::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn search(&self, text: Option<String>, page: PageRequest) -> ProfileResult<Vec<Profile>> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .skip(page.offset())
            .limit(page.limit())
            .build();

        let cursor = self
            .collection
            .find(Self::search_filter(text.as_deref()))
            .with_options(options)
            .await?;
        let docs: Vec<ProfileDocument> = cursor.try_collect().await?;

        docs.into_iter().map(Profile::try_from).collect()
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn create(&self, profile: Profile) -> ProfileResult<Profile> {
        let document = ProfileDocument::from(profile.clone());

        match self.collection.insert_one(&document).await {
            Ok(_) => {
                tracing::info!(profile_id = %profile.id, "Profile created");
                Ok(profile)
            }
            Err(e) if is_duplicate_key(&e) => Err(ProfileError::AlreadyExists(profile.id)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn update(&self, profile: Profile) -> ProfileResult<Profile> {
        let document = ProfileDocument::from(profile.clone());
        let result = self
            .collection
            .replace_one(Self::id_filter(profile.id), &document)
            .await?;

        if result.matched_count == 0 {
            return Err(ProfileError::NotFound(profile.id));
        }

        tracing::info!(profile_id = %profile.id, "Profile updated");
        Ok(profile)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProfileResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(ProfileError::NotFound(id));
        }

        tracing::info!(profile_id = %id, "Profile deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_filter_without_text_matches_all() {
        assert!(MongoProfileRepository::search_filter(None).is_empty());
    }

    #[test]
    fn test_search_filter_escapes_metacharacters() {
        let filter = MongoProfileRepository::search_filter(Some("St. (North)"));
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);

        let first = clauses[0].as_document().unwrap();
        let pattern = first
            .get_document("firstName")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert_eq!(pattern, r"St\. \(North\)");
    }

    #[test]
    fn test_bad_stored_id_is_database_error() {
        let doc = ProfileDocument {
            id: "not-a-uuid".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            age: 34,
            address: String::new(),
        };
        assert!(matches!(
            Profile::try_from(doc),
            Err(ProfileError::Database(_))
        ));
    }
}
