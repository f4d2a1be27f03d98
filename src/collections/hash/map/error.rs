use derive_more::{Display, Error};

/// Index calculation was attempted on a hash-based collection with no buckets.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to calculate indicies for hash-based collection with capacity 0!")]
pub(crate) struct IndexNoCap;

/// The requested capacity can't be represented as a [`usize`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
