//! Render-context construction from environment and seed sources.

mod builder;
mod env;
mod error;
mod file;
mod value;

pub use builder::ContextBuilder;
pub use env::EnvSnapshot;
pub use error::ContextError;
pub use value::{to_engine_value, Context, Value};
