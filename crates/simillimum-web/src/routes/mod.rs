pub mod analysis;
pub mod api;
pub mod health;
pub mod page;
