pub mod fmt;
#[cfg(test)]
pub mod hash;
#[cfg(test)]
pub mod panic;
pub mod result;
