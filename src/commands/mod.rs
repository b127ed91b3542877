//! Command implementations for the courtside CLI

pub mod generate_ratings;
pub mod predict;
