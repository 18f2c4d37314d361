//! CLI command implementations

pub mod foods;
pub mod locate;
pub mod recommend;
