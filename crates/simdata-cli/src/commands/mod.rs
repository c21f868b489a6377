//! Command implementations.

pub mod extract;
pub mod fetch;
pub mod refresh;
pub mod trinkets;
