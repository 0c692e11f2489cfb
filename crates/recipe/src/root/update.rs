use chefbook_shared::Result;
use time::OffsetDateTime;
use validator::Validate;

use crate::validation::validate_not_blank;
use crate::{Ingredient, Recipe, RecipeStep};

impl Recipe {
    pub fn rename(&mut self, title: impl Into<String>, at: OffsetDateTime) -> Result<()> {
        let title = title.into();
        if validate_not_blank(&title).is_err() {
            chefbook_shared::invalid!("recipe title must not be blank");
        }

        let stamp = self.stamp(at)?;
        self.title = title;
        self.updated_at = stamp;

        Ok(())
    }

    pub fn push_ingredient(&mut self, ingredient: Ingredient, at: OffsetDateTime) -> Result<()> {
        ingredient.validate()?;

        let stamp = self.stamp(at)?;
        self.ingredients.push(ingredient);
        self.updated_at = stamp;

        Ok(())
    }

    pub fn remove_ingredient(&mut self, idx: usize, at: OffsetDateTime) -> Result<Ingredient> {
        if idx >= self.ingredients.len() {
            chefbook_shared::invalid!(
                "ingredient {} out of range, recipe has {}",
                idx,
                self.ingredients.len()
            );
        }

        let stamp = self.stamp(at)?;
        let ingredient = self.ingredients.remove(idx);
        self.updated_at = stamp;

        Ok(ingredient)
    }

    pub fn push_step(&mut self, step: RecipeStep, at: OffsetDateTime) -> Result<()> {
        step.validate()?;

        let stamp = self.stamp(at)?;
        self.steps.push(step);
        self.updated_at = stamp;

        Ok(())
    }

    pub fn remove_step(&mut self, idx: usize, at: OffsetDateTime) -> Result<RecipeStep> {
        if idx >= self.steps.len() {
            chefbook_shared::invalid!("step {} out of range, recipe has {}", idx, self.steps.len());
        }

        let stamp = self.stamp(at)?;
        let step = self.steps.remove(idx);
        self.updated_at = stamp;

        Ok(step)
    }
}
