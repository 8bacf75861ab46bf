//! Plain geometric value types.

mod vector2d;

pub use vector2d::*;
