//! Dialog overlays

pub mod advice;
pub mod help;
