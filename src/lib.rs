pub mod errors;
pub mod context;
pub mod expression;
pub mod engine;
pub mod config;

pub use context::Context;
pub use engine::{evaluate, format_result, sample_context, sample_expression, Evaluator};
pub use errors::{ConfigError, Result};
pub use expression::{Expression, Or, Terminal};
