//! Utility functions.
//!
//! - [`code_generator`] - Random short identifier generation

pub mod code_generator;
