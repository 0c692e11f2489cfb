use chefbook_shared::{Result, format_timestamp, parse_timestamp};
use time::OffsetDateTime;

use crate::Recipe;

mod create;
mod reorder;
mod update;

pub use create::CreateRecipeInput;

impl Recipe {
    /// Marks the recipe as edited at `at`.
    pub fn touch(&mut self, at: OffsetDateTime) -> Result<()> {
        self.updated_at = self.stamp(at)?;

        Ok(())
    }

    /// Formats `at` as the next `updated_at`. `updated_at` only moves
    /// forward, so instants before creation or before the last edit are
    /// refused.
    fn stamp(&self, at: OffsetDateTime) -> Result<String> {
        let created_at = parse_timestamp(&self.created_at)?;
        if at < created_at {
            let at = format_timestamp(at)?;
            chefbook_shared::invalid!(
                "edit at {} precedes creation of recipe `{}` at {}",
                at,
                self.id,
                self.created_at
            );
        }

        let updated_at = parse_timestamp(&self.updated_at)?;
        if at < updated_at {
            let at = format_timestamp(at)?;
            chefbook_shared::invalid!(
                "edit at {} precedes last edit of recipe `{}` at {}",
                at,
                self.id,
                self.updated_at
            );
        }

        format_timestamp(at)
    }
}
