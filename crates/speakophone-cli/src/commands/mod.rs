//! CLI command implementations

pub mod bake;
pub mod dump;
pub mod number;
pub mod roll;
pub mod say;

mod output;
