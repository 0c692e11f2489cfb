use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Recipe;
use crate::validation::{validate_not_blank, validate_rating, validate_timestamp};

/// List-view projection of a [`Recipe`]: the author is reduced to the
/// chef's display name and the ordered content is left out.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    pub thumbnail: String,
    pub author: String,
    #[validate(custom(function = "validate_rating"))]
    pub rating: f64,
    #[validate(custom(function = "validate_timestamp"))]
    pub created_at: String,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_owned(),
            title: recipe.title.to_owned(),
            thumbnail: recipe.thumbnail.to_owned(),
            author: recipe.creator.name.to_owned(),
            rating: recipe.rating,
            created_at: recipe.created_at.to_owned(),
        }
    }
}

impl Recipe {
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary::from(self)
    }
}
