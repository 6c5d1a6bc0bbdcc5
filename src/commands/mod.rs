//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::{EvaluationResult, evaluate_words};
pub use simple::run_simple;
