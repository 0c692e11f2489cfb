use std::collections::HashSet;

use chefbook_shared::{Error, Result, parse_timestamp};
use validator::Validate;

use crate::{Recipe, RecipeSummary};

/// In-process set of recipes keyed by id.
///
/// Ids are unique among held recipes and an id is retired once its recipe
/// is removed, so it can never be handed to another recipe.
#[derive(Debug, Default, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    ids: HashSet<String>,
    retired: HashSet<String>,
}

impl RecipeCatalog {
    pub fn insert(&mut self, recipe: Recipe) -> Result<()> {
        recipe.validate()?;

        if self.ids.contains(&recipe.id) || self.retired.contains(&recipe.id) {
            return Err(Error::DuplicateId(recipe.id));
        }

        self.ids.insert(recipe.id.to_owned());
        self.recipes.push(recipe);

        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Applies an edit in place. The edit may not change the recipe id and
    /// the result must still validate, otherwise the recipe is left as it was.
    pub fn update<F>(&mut self, id: &str, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Recipe) -> Result<()>,
    {
        let Some(recipe) = self.recipes.iter_mut().find(|recipe| recipe.id == id) else {
            chefbook_shared::not_found!("recipe `{}` not found", id);
        };

        let mut draft = recipe.clone();
        edit(&mut draft)?;

        if draft.id != recipe.id {
            chefbook_shared::invalid!("recipe id `{}` is immutable", recipe.id);
        }

        draft.validate()?;
        *recipe = draft;

        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Recipe> {
        let Some(idx) = self.recipes.iter().position(|recipe| recipe.id == id) else {
            chefbook_shared::not_found!("recipe `{}` not found", id);
        };

        let recipe = self.recipes.remove(idx);
        self.ids.remove(&recipe.id);
        self.retired.insert(recipe.id.to_owned());

        tracing::debug!(recipe.id = %recipe.id, "recipe removed from catalog");

        Ok(recipe)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_retired(&self, id: &str) -> bool {
        self.retired.contains(id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Summaries ordered by most recently created first.
    pub fn summaries(&self) -> Vec<RecipeSummary> {
        let mut recipes = self.recipes.iter().collect::<Vec<_>>();
        recipes.sort_by_key(|recipe| std::cmp::Reverse(parse_timestamp(&recipe.created_at).ok()));

        recipes.into_iter().map(RecipeSummary::from).collect()
    }

    pub fn into_vec(self) -> Vec<Recipe> {
        self.recipes
    }
}
