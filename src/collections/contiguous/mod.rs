//! Contiguous collection types. Namely [`Array`], an owning collection which is sized once at
//! runtime.
#![warn(missing_docs)]

pub mod array;

#[doc(inline)]
pub use array::Array;
