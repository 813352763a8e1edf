/// Random passwords drawn from a pool of character classes.
pub mod password_generator;
/// Heuristic strength scoring with a verdict and a (not always kind) remark.
pub mod strength;

/// Character by character reveal of a freshly generated password.
pub mod reveal;
pub mod clipboard;
pub mod settings;

pub mod error;

pub use error::{Error, Result};
pub use password_generator::{generate, generate_with, GenerationPolicy};
pub use strength::{analyze, StrengthCategory, StrengthVerdict};
