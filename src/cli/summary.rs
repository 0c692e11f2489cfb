use std::{io::Write, path::Path};

use anyhow::Result;
use chefbook_recipe::RecipeCatalog;

/// Writes the summaries of a recipe file, most recent first.
pub fn summary(path: &Path, out: &mut impl Write) -> Result<()> {
    let mut catalog = RecipeCatalog::default();
    for recipe in crate::input::read_recipes(path)? {
        catalog.insert(recipe)?;
    }

    writeln!(out, "{}", serde_json::to_string_pretty(&catalog.summaries())?)?;

    Ok(())
}
