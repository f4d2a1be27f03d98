//! A small collections crate built around a hash-based set.
//!
//! # Purpose
//! [`HashSet`](collections::hash::HashSet) stores distinct values of any type implementing
//! [`Hash`](std::hash::Hash) and [`Eq`], backed by an open-addressing
//! [`HashMap`](collections::hash::HashMap) where every key maps to the unit type. On top of the
//! basic container operations, it supports set algebra (union, intersection, subtraction and
//! intersection tests) against any type implementing the
//! [`Set`](collections::traits::set::Set) trait.
//!
//! # Iteration Order
//! Nothing in this crate guarantees an iteration order. The order in which elements are produced
//! depends on their hashes and the current capacity, so it may change after any mutation, between
//! two sets with the same contents or between runs (the default hasher is randomly seeded).
//!
//! # Error Handling
//! The set operations themselves are total: adding a duplicate or removing an absent element is a
//! no-op rather than an error. The only fallible area is capacity management, where errors are
//! strongly typed structs (see [`CapacityOverflow`](collections::hash::CapacityOverflow)). The
//! non-`try` variants panic with the error's message instead, the same way [`Vec::reserve`] does.
//!
//! # Concurrency
//! Nothing here is internally synchronized. Mutation requires `&mut`, so sharing a set across
//! threads for writing means wrapping it in a lock.
//!
//! # Dependencies
//! Errors derive their trait impls with `derive_more` and table reallocations are reported at
//! trace level through the `log` facade.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
