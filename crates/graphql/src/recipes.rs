use chefbook_recipe::{Recipe, RecipeCatalog, RecipeSummary, codec};
use serde_json::Value;

use crate::{Error, Result};

/// Decodes the recipes found under `field` in a response's `data`.
///
/// The field may hold a list, a single recipe (lookups by id), or `null`
/// (nothing matched). Each recipe is validated and ids must be unique.
pub fn recipes_from_data(data: Value, field: &str) -> Result<Vec<Recipe>> {
    let items = items_from_data(data, field)?;

    let mut catalog = RecipeCatalog::default();
    for (idx, item) in items.into_iter().enumerate() {
        let recipe = codec::from_value(item).inspect_err(|err| {
            tracing::warn!(field, idx, error = %err, "rejected recipe payload");
        })?;
        catalog.insert(recipe)?;
    }

    tracing::debug!(field, count = catalog.len(), "recipes decoded");

    Ok(catalog.into_vec())
}

/// Same as [`recipes_from_data`] for list-view queries selecting only
/// `id`, `title`, `thumbnail`, `author`, `rating` and `createdAt`.
pub fn summaries_from_data(data: Value, field: &str) -> Result<Vec<RecipeSummary>> {
    let items = items_from_data(data, field)?;

    let summaries = codec::summaries_from_values(items).inspect_err(|err| {
        tracing::warn!(field, error = %err, "rejected recipe summary payload");
    })?;

    tracing::debug!(field, count = summaries.len(), "recipe summaries decoded");

    Ok(summaries)
}

fn items_from_data(data: Value, field: &str) -> Result<Vec<Value>> {
    let Value::Object(mut data) = data else {
        return Err(Error::Shape("`data` is not an object".to_owned()));
    };

    let Some(value) = data.remove(field) else {
        return Err(Error::Shape(format!("`data.{field}` is missing")));
    };

    match value {
        Value::Array(items) => Ok(items),
        Value::Object(_) => Ok(vec![value]),
        Value::Null => Ok(vec![]),
        other => Err(Error::Shape(format!(
            "`data.{field}` must be a recipe or a list of recipes, got {other}"
        ))),
    }
}
