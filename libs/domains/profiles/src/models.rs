use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Largest page the profile list will return
pub const MAX_PROFILE_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = 34)]
    pub age: u8,
    #[schema(example = "221B Baker Street, London")]
    pub address: String,
}

impl Profile {
    pub fn from_input(id: Uuid, input: ProfileInput) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            age: input.age,
            address: input.address,
        }
    }
}

/// Request body for create and full replace; the id is never taken from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub age: u8,
    #[serde(default)]
    pub address: String,
}

/// Query string of `GET /profile`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProfileQuery {
    /// Substring to look for in first name, last name or address
    pub query: Option<String>,
    /// Zero-based page index
    #[serde(default)]
    pub page: u64,
    /// 1 to 10; anything else means 10
    pub page_size: Option<u64>,
}

impl ProfileQuery {
    /// Search text, if any was given
    pub fn text(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    pub fn page_request(&self) -> PageRequest {
        let size = match self.page_size {
            Some(size @ 1..=MAX_PROFILE_PAGE_SIZE) => size,
            _ => MAX_PROFILE_PAGE_SIZE,
        };
        PageRequest {
            page: self.page,
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_falls_back_to_ten() {
        for size in [None, Some(0), Some(11), Some(500)] {
            let query = ProfileQuery {
                page_size: size,
                ..Default::default()
            };
            assert_eq!(query.page_request().size, 10);
        }

        let query = ProfileQuery {
            page: 3,
            page_size: Some(4),
            ..Default::default()
        };
        assert_eq!(query.page_request(), PageRequest { page: 3, size: 4 });
    }

    #[test]
    fn test_empty_query_text_is_none() {
        let query = ProfileQuery {
            query: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query.text(), None);
    }

    #[test]
    fn test_input_ignores_body_id() {
        let input: ProfileInput = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","firstName":"Jane","lastName":"Doe","age":34}"#,
        )
        .unwrap();
        assert_eq!(input.address, "");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range_does_not_parse() {
        let result = serde_json::from_str::<ProfileInput>(
            r#"{"firstName":"Jane","lastName":"Doe","age":300}"#,
        );
        assert!(result.is_err());
    }
}
