use chefbook_shared::Result;
use time::OffsetDateTime;

use crate::Recipe;

/// Moves `items[from]` so that it ends up at index `to`, shifting the items
/// in between. Returns whether the order changed.
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<bool> {
    let len = items.len();
    if from >= len || to >= len {
        chefbook_shared::invalid!("cannot move {} to {} in a list of {}", from, to, len);
    }

    if from == to {
        return Ok(false);
    }

    let item = items.remove(from);
    items.insert(to, item);

    Ok(true)
}

impl Recipe {
    /// Reorders the ingredient list. A move onto the same position changes
    /// nothing and leaves `updated_at` untouched.
    pub fn move_ingredient(&mut self, from: usize, to: usize, at: OffsetDateTime) -> Result<()> {
        let stamp = self.stamp(at)?;
        if move_item(&mut self.ingredients, from, to)? {
            self.updated_at = stamp;
        }

        Ok(())
    }

    pub fn move_step(&mut self, from: usize, to: usize, at: OffsetDateTime) -> Result<()> {
        let stamp = self.stamp(at)?;
        if move_item(&mut self.steps, from, to)? {
            self.updated_at = stamp;
        }

        Ok(())
    }
}
