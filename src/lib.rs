pub mod context;
pub mod filters;
mod error;

pub use context::{to_engine_value, Context, ContextBuilder, ContextError, EnvSnapshot, Value};
pub use error::Error;
