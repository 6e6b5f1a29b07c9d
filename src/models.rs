//! Frontend Models
//!
//! Data structures matching the backend collection resource.

use serde::{Deserialize, Serialize};

/// Food data structure (matches backend, identity = `id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Decimal price kept as a string, exactly as the backend sends it
    pub price: String,
    pub available: bool,
    pub image: String,
}

/// A client-constructed food payload with no server identity yet
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl Food {
    /// Apply a draft on top of an existing item.
    ///
    /// The id and availability of `self` are kept; every draft field wins.
    pub fn merged(&self, draft: &FoodDraft) -> Food {
        Food {
            id: self.id,
            available: self.available,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price.clone(),
            image: draft.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_food(id: u32) -> Food {
        Food {
            id,
            name: format!("Food {}", id),
            description: "tasty".to_string(),
            price: "10.00".to_string(),
            available: true,
            image: format!("https://img.example/{}.png", id),
        }
    }

    #[test]
    fn test_merged_keeps_identity() {
        let food = Food {
            available: false,
            ..make_food(7)
        };
        let draft = FoodDraft {
            name: "Ao molho".to_string(),
            description: "new description".to_string(),
            price: "9.99".to_string(),
            image: "https://img.example/new.png".to_string(),
        };

        let merged = food.merged(&draft);

        assert_eq!(merged.id, 7);
        assert!(!merged.available);
        assert_eq!(merged.name, "Ao molho");
        assert_eq!(merged.description, "new description");
        assert_eq!(merged.price, "9.99");
        assert_eq!(merged.image, "https://img.example/new.png");
    }

    #[test]
    fn test_food_json_round_trip() {
        let food = make_food(1);
        let json = serde_json::to_string(&food).unwrap();
        let back: Food = serde_json::from_str(&json).unwrap();
        assert_eq!(back, food);
    }
}
