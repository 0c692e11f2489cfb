use std::path::Path;

use anyhow::Context;
use chefbook_recipe::{Recipe, codec};

/// Reads a recipe file holding either one recipe object or an array of
/// recipes. Everything returned has been validated.
pub fn read_recipes(path: &Path) -> anyhow::Result<Vec<Recipe>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let recipes = if content.trim_start().starts_with('[') {
        codec::from_json_list(&content)
    } else {
        codec::from_json(&content).map(|recipe| vec![recipe])
    }
    .with_context(|| format!("invalid recipe file {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = recipes.len(), "recipes loaded");

    Ok(recipes)
}
