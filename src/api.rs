//! REST Client
//!
//! Frontend bindings to the `/foods` collection resource.

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Food, FoodDraft};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// POST body: a draft with availability forced on
#[derive(Serialize)]
struct CreateFoodBody<'a> {
    #[serde(flatten)]
    draft: &'a FoodDraft,
    available: bool,
}

/// Thin client over the backend collection endpoint
#[derive(Clone)]
pub struct FoodsApi {
    client: Client,
    base_url: String,
}

impl FoodsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/foods/{}", self.base_url, id)
    }

    /// Fetch the whole collection in server order
    pub async fn list(&self) -> Result<Vec<Food>, ApiError> {
        let foods = self
            .client
            .get(self.collection_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(foods)
    }

    /// Create a food; the server assigns the id and echoes the canonical item
    pub async fn create(&self, draft: &FoodDraft) -> Result<Food, ApiError> {
        let body = CreateFoodBody {
            draft,
            available: true,
        };
        let food = self
            .client
            .post(self.collection_url())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(food)
    }

    /// Replace the item with the given id; returns the server's version
    pub async fn update(&self, food: &Food) -> Result<Food, ApiError> {
        let updated = self
            .client
            .put(self.item_url(food.id))
            .json(food)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: u32) -> Result<(), ApiError> {
        self.client
            .delete(self.item_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_construction() {
        let api = FoodsApi::new("http://localhost:3333");
        assert_eq!(api.collection_url(), "http://localhost:3333/foods");
        assert_eq!(api.item_url(42), "http://localhost:3333/foods/42");
    }

    #[test]
    fn test_url_trailing_slash_trimmed() {
        let api = FoodsApi::new("http://localhost:3333/");
        assert_eq!(api.collection_url(), "http://localhost:3333/foods");
    }

    #[test]
    fn test_create_body_forces_available() {
        let draft = FoodDraft {
            name: "Veggie".to_string(),
            description: "greens".to_string(),
            price: "21.90".to_string(),
            image: "https://img.example/veggie.png".to_string(),
        };
        let body = CreateFoodBody {
            draft: &draft,
            available: true,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Veggie",
                "description": "greens",
                "price": "21.90",
                "image": "https://img.example/veggie.png",
                "available": true,
            })
        );
    }

    #[test]
    fn test_create_body_passes_empty_fields_through() {
        // Field validation is the backend's job; an empty draft still
        // serializes into a well-formed create payload
        let draft = FoodDraft::default();
        let body = CreateFoodBody {
            draft: &draft,
            available: true,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "",
                "description": "",
                "price": "",
                "image": "",
                "available": true,
            })
        );
    }
}
