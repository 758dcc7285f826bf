//! Core data models for lexika.
//!
//! Epistemic mapping:
//! - K_i (Knowledge): Concrete wire shapes with compile-time guarantees
//! - B_i (Beliefs): Wrapped in Result/Option
//! - I^R (Resolvable): Config parameters
//! - I^B (Bounded): Error variants with a retryable classification

mod config;
mod error;
mod record;

pub use config::*;
pub use error::*;
pub use record::*;
