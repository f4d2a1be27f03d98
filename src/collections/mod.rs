//! Collection types.
//!
//! # Purpose
//! The hash-based collections here are written from scratch rather than wrapping
//! [`std::collections`], covering the hashing, probing and iteration concerns directly.
//!
//! # Method
//! Shared set behaviour lives in [`traits::set::Set`], so set algebra works between any two
//! implementors rather than only between two sets of the same concrete type.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
