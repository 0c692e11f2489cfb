use std::borrow::Cow;

use chefbook_shared::parse_timestamp;
use validator::ValidationError;

use crate::{Ingredient, Recipe};

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "Value must not be blank"));
    }

    Ok(())
}

pub(crate) fn validate_timestamp(value: &str) -> Result<(), ValidationError> {
    if parse_timestamp(value).is_err() {
        return Err(error(
            "timestamp",
            "Timestamp must be ISO-8601, e.g. 2024-01-01T00:00:00Z",
        ));
    }

    Ok(())
}

pub(crate) fn validate_rating(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(error("rating", "Rating must be a non-negative number"));
    }

    Ok(())
}

/// Quantities are optional, but a present one must be a finite,
/// non-negative number.
pub(crate) fn validate_quantity(ingredient: &Ingredient) -> Result<(), ValidationError> {
    match ingredient.quantity {
        Some(quantity) if !quantity.is_finite() || quantity < 0.0 => Err(error(
            "quantity",
            "Quantity must be a non-negative number",
        )),
        _ => Ok(()),
    }
}

/// `updated_at` may never precede `created_at`. Unparseable timestamps are
/// reported by the field validators.
pub(crate) fn validate_chronology(recipe: &Recipe) -> Result<(), ValidationError> {
    let (Ok(created_at), Ok(updated_at)) = (
        parse_timestamp(&recipe.created_at),
        parse_timestamp(&recipe.updated_at),
    ) else {
        return Ok(());
    };

    if updated_at < created_at {
        return Err(error(
            "chronology",
            "updatedAt must not be earlier than createdAt",
        ));
    }

    Ok(())
}
