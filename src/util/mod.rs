//! Timing utilities: debounced invocation and relative-time formatting.

mod debounce;
mod relative;

pub use debounce::*;
pub use relative::*;
