use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::validation::{
    validate_chronology, validate_not_blank, validate_quantity, validate_rating,
    validate_timestamp,
};

#[derive(
    Encode,
    Decode,
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IngredientUnit {
    G,
    Kg,
    Ml,
    L,
    Tsp,
    Tbsp,
    Cup,
    Piece,
    Pinch,
}

pub trait IngredientUnitFormat {
    fn format(&self, value: f32) -> String;
}

impl IngredientUnitFormat for Option<IngredientUnit> {
    fn format(&self, value: f32) -> String {
        match self {
            Some(IngredientUnit::Ml) if value >= 1000.0 => {
                format!("{} l", trim_number(value / 1000.0))
            }
            Some(IngredientUnit::G) if value >= 1000.0 => {
                format!("{} kg", trim_number(value / 1000.0))
            }
            Some(unit) => format!("{} {unit}", trim_number(value)),
            None => trim_number(value),
        }
    }
}

fn trim_number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// The authoring entity of a recipe.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Chef {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Encode, Decode, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_quantity"))]
pub struct Ingredient {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f32>,
    #[serde(default)]
    pub unit: Option<IngredientUnit>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }

    pub fn with_quantity(mut self, quantity: f32, unit: impl Into<Option<IngredientUnit>>) -> Self {
        self.quantity = Some(quantity);
        self.unit = unit.into();
        self
    }

    /// Human readable amount, e.g. `1.5 kg` or `2 tbsp`.
    pub fn display_quantity(&self) -> Option<String> {
        self.quantity.map(|quantity| self.unit.format(quantity))
    }
}

#[derive(Encode, Decode, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
    #[serde(default)]
    pub duration_minutes: Option<u16>,
}

impl RecipeStep {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            duration_minutes: None,
        }
    }
}

/// Canonical recipe shape, as served by the GraphQL endpoint.
///
/// Every field is required on the wire. `ingredients` and `steps` are
/// ordered: their position is part of the recipe, so any reordering goes
/// through the edit operations which stamp `updated_at`.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_chronology"))]
pub struct Recipe {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    pub thumbnail: String,
    pub pictures: Vec<String>,
    #[validate(nested)]
    pub creator: Chef,
    pub preparation_time: String,
    #[validate(nested)]
    pub ingredients: Vec<Ingredient>,
    #[validate(nested)]
    pub steps: Vec<RecipeStep>,
    #[validate(custom(function = "validate_rating"))]
    pub rating: f64,
    pub like_count: u32,
    #[validate(custom(function = "validate_timestamp"))]
    pub created_at: String,
    #[validate(custom(function = "validate_timestamp"))]
    pub updated_at: String,
}

impl Recipe {
    /// Steps paired with their 1-based position.
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &RecipeStep)> {
        self.steps.iter().enumerate().map(|(idx, step)| (idx + 1, step))
    }

    pub fn total_step_minutes(&self) -> u32 {
        self.steps
            .iter()
            .filter_map(|step| step.duration_minutes)
            .map(u32::from)
            .sum()
    }
}
