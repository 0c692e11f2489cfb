#![allow(dead_code)]

use chefbook_recipe::{Chef, Ingredient, IngredientUnit, Recipe, RecipeStep};
use serde_json::json;

pub fn chef() -> Chef {
    Chef {
        id: "chef-1".to_owned(),
        name: "Julia".to_owned(),
        avatar: Some("/avatars/julia.png".to_owned()),
    }
}

pub fn pancakes() -> Recipe {
    Recipe {
        id: "r1".to_owned(),
        title: "Pancakes".to_owned(),
        thumbnail: "/images/pancakes/thumb.jpg".to_owned(),
        pictures: vec![
            "/images/pancakes/1.jpg".to_owned(),
            "/images/pancakes/2.jpg".to_owned(),
        ],
        creator: chef(),
        preparation_time: "PT20M".to_owned(),
        ingredients: vec![
            Ingredient::new("flour").with_quantity(250.0, IngredientUnit::G),
            Ingredient::new("egg").with_quantity(2.0, IngredientUnit::Piece),
            Ingredient::new("milk").with_quantity(500.0, IngredientUnit::Ml),
        ],
        steps: vec![
            RecipeStep {
                description: "mix".to_owned(),
                duration_minutes: Some(5),
            },
            RecipeStep {
                description: "cook".to_owned(),
                duration_minutes: Some(15),
            },
        ],
        rating: 4.5,
        like_count: 10,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-02T00:00:00Z".to_owned(),
    }
}

pub fn recipe(id: &str, title: &str, created_at: &str) -> Recipe {
    Recipe {
        id: id.to_owned(),
        title: title.to_owned(),
        created_at: created_at.to_owned(),
        updated_at: created_at.to_owned(),
        ..pancakes()
    }
}

pub fn pancakes_json() -> serde_json::Value {
    json!({
        "id": "r1",
        "title": "Pancakes",
        "thumbnail": "/images/pancakes/thumb.jpg",
        "pictures": ["/images/pancakes/1.jpg", "/images/pancakes/2.jpg"],
        "creator": { "id": "chef-1", "name": "Julia", "avatar": "/avatars/julia.png" },
        "preparationTime": "PT20M",
        "ingredients": [
            { "name": "flour", "quantity": 250.0, "unit": "g" },
            { "name": "egg", "quantity": 2.0, "unit": "piece" },
            { "name": "milk", "quantity": 500.0, "unit": "ml" }
        ],
        "steps": [
            { "description": "mix", "durationMinutes": 5 },
            { "description": "cook", "durationMinutes": 15 }
        ],
        "rating": 4.5,
        "likeCount": 10,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    })
}

pub fn summary_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "thumbnail": "/images/pancakes/thumb.jpg",
        "author": "Julia",
        "rating": 4.5,
        "createdAt": "2024-01-01T00:00:00Z"
    })
}
