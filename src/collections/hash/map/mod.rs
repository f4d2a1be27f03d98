//! A module containing [`HashMap`] and associtated types.
//!
//! The other types here provide owned and borrowed iteration over entries or keys, plus the errors
//! produced by capacity management.
//!
//! There is no mutable iterator over entries or keys because mutating the keys of a HashMap in
//! place would cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod error;
mod hash_map;
mod iter;
mod tests;

pub use error::CapacityOverflow;
pub(crate) use error::IndexNoCap;
pub use hash_map::*;
pub use iter::*;
