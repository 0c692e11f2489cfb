use chefbook_shared::{Result, format_timestamp};
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::validation::validate_not_blank;
use crate::{Chef, Ingredient, Recipe, RecipeStep};

#[derive(Default, Validate)]
pub struct CreateRecipeInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    pub thumbnail: String,
    pub pictures: Vec<String>,
    pub preparation_time: String,
    #[validate(nested)]
    pub ingredients: Vec<Ingredient>,
    #[validate(nested)]
    pub steps: Vec<RecipeStep>,
}

impl Recipe {
    /// Drafts a new recipe authored by `creator`, with a fresh id and no
    /// engagement yet.
    pub fn new(input: CreateRecipeInput, creator: Chef, at: OffsetDateTime) -> Result<Self> {
        input.validate()?;
        creator.validate()?;

        let created_at = format_timestamp(at)?;
        let recipe = Self {
            id: Ulid::new().to_string(),
            title: input.title,
            thumbnail: input.thumbnail,
            pictures: input.pictures,
            creator,
            preparation_time: input.preparation_time,
            ingredients: input.ingredients,
            steps: input.steps,
            rating: 0.0,
            like_count: 0,
            updated_at: created_at.to_owned(),
            created_at,
        };

        recipe.validate()?;

        tracing::debug!(recipe.id = %recipe.id, creator.id = %recipe.creator.id, "recipe drafted");

        Ok(recipe)
    }
}
