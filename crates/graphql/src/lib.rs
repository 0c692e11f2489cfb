mod client;
mod envelope;
mod error;
mod recipes;

pub use client::{Client, ClientOptions, DEFAULT_ENDPOINT};
pub use envelope::*;
pub use error::{Error, Result};
pub use recipes::{recipes_from_data, summaries_from_data};
