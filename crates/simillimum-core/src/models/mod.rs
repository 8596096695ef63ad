pub mod analysis;
pub mod session;
pub mod symptom;
pub mod token_count;
pub mod totality;
pub mod transaction;
