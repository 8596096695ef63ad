//! simillimum-core
//!
//! Pure domain types for case recording and repertorization results, the
//! structured-output schema sent to the model, and the session state machine.
//! No network or HTTP dependency. This is the shared vocabulary of the
//! Simillimum system.

pub mod error;
pub mod models;
pub mod schema;
