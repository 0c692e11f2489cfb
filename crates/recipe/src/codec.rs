//! Wire (JSON) and snapshot (bitcode) encodings of [`Recipe`] and
//! [`RecipeSummary`].
//!
//! Decoding never hands out an unchecked value: every decoded recipe is
//! validated before it is returned.

use std::collections::HashSet;

use chefbook_shared::{Error, Result};
use validator::Validate;

use crate::{Recipe, RecipeCatalog, RecipeSummary};

pub fn from_json(input: &str) -> Result<Recipe> {
    let recipe: Recipe = serde_json::from_str(input)?;
    recipe.validate()?;

    Ok(recipe)
}

pub fn from_value(value: serde_json::Value) -> Result<Recipe> {
    let recipe: Recipe = serde_json::from_value(value)?;
    recipe.validate()?;

    Ok(recipe)
}

/// Decodes a JSON array of recipes, rejecting duplicate ids.
pub fn from_json_list(input: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(input)?;
    let mut catalog = RecipeCatalog::default();
    for recipe in recipes {
        catalog.insert(recipe)?;
    }

    Ok(catalog.into_vec())
}

pub fn to_json(recipe: &Recipe) -> Result<String> {
    Ok(serde_json::to_string(recipe)?)
}

pub fn summary_from_value(value: serde_json::Value) -> Result<RecipeSummary> {
    let summary: RecipeSummary = serde_json::from_value(value)?;
    summary.validate()?;

    Ok(summary)
}

/// Decodes a JSON array of list-view recipes, rejecting duplicate ids.
pub fn summaries_from_json(input: &str) -> Result<Vec<RecipeSummary>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(input)?;
    summaries_from_values(values)
}

pub fn summaries_from_values(values: Vec<serde_json::Value>) -> Result<Vec<RecipeSummary>> {
    let mut ids = HashSet::new();
    let mut summaries = Vec::with_capacity(values.len());
    for value in values {
        let summary = summary_from_value(value)?;
        if !ids.insert(summary.id.to_owned()) {
            return Err(Error::DuplicateId(summary.id));
        }
        summaries.push(summary);
    }

    Ok(summaries)
}

pub fn encode_snapshot(recipe: &Recipe) -> Vec<u8> {
    bitcode::encode(recipe)
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<Recipe> {
    let recipe: Recipe = bitcode::decode(bytes)?;
    recipe.validate()?;

    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_a_payload_error() {
        let err = from_json(r#"{"id": "r1", "title": "Pancakes"}"#).unwrap_err();
        assert!(matches!(err, chefbook_shared::Error::Payload(_)));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn wrong_type_is_a_payload_error() {
        let err = from_json(r#"{"id": 12}"#).unwrap_err();
        assert!(matches!(err, chefbook_shared::Error::Payload(_)));
    }

    #[test]
    fn summary_missing_author_is_a_payload_error() {
        let err = summary_from_value(serde_json::json!({
            "id": "r1",
            "title": "Pancakes",
            "thumbnail": "",
            "rating": 4.5,
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap_err();
        assert!(matches!(err, chefbook_shared::Error::Payload(_)));
        assert!(err.to_string().contains("author"));
    }

    #[test]
    fn garbage_snapshot_is_rejected() {
        let err = decode_snapshot(&[0xff, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, chefbook_shared::Error::Snapshot(_)));
    }
}
