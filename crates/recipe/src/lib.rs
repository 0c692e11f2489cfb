mod catalog;
pub mod codec;
mod root;
mod summary;
mod types;
mod validation;

pub use catalog::RecipeCatalog;
pub use root::CreateRecipeInput;
pub use summary::RecipeSummary;
pub use types::*;
