//! simillimum-render
//!
//! HTML rendering of the case-recording page: the grading matrix, the view
//! model handed to the templates, and the Tera template set.

pub mod error;
pub mod matrix;
pub mod render;
pub mod view;
