//! Hash-based collections: [`HashMap`] and [`HashSet`].

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::{CapacityOverflow, HashMap};
#[doc(inline)]
pub use set::HashSet;
