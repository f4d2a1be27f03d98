//! Traits shared by collections with the same capabilities.

pub mod set;
