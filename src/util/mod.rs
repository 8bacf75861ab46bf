//! Errors and helpers shared across the crate.

pub mod error;
pub(crate) mod result;

#[cfg(test)]
pub(crate) mod alloc;
#[cfg(test)]
pub(crate) mod panic;
