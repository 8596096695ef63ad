//! simillimum-gemini
//!
//! Gemini `generateContent` invocation with schema-constrained output, the
//! repertorization prompt, and validation of the structured response.

pub mod client;
pub mod error;
pub mod prompt;
pub mod tokens;
pub mod transaction;
pub mod wire;
