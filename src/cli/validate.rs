use std::{io::Write, path::Path};

use anyhow::Result;

pub fn validate(path: &Path, out: &mut impl Write) -> Result<()> {
    let recipes = crate::input::read_recipes(path)?;

    for recipe in &recipes {
        tracing::info!(
            recipe.id = %recipe.id,
            ingredients = recipe.ingredients.len(),
            steps = recipe.steps.len(),
            "recipe is valid"
        );
    }

    writeln!(out, "{}: {} valid recipe(s)", path.display(), recipes.len())?;

    Ok(())
}
