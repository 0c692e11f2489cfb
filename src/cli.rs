mod query;
mod summary;
mod validate;

pub use query::{QueryArgs, query};
pub use summary::summary;
pub use validate::validate;
