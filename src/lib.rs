//! This crate is a small collection of value types written to explore ownership in Rust: most
//! notably an owning, runtime-sized [`Array`](collections::contiguous::Array), along with a couple
//! of plain value types that are handy to store in one.
//!
//! # Purpose
//! Each type here is deliberately small and self-contained. The goal is to show how a type which
//! owns a heap buffer behaves across its whole life: construction, deep copies, ownership
//! transfer, access, iteration and release. None of them are meant to replace anything in [`std`].
//!
//! # Ownership
//! An [`Array`](collections::contiguous::Array) owns its buffer exclusively. Cloning produces a deep
//! copy which evolves independently, while [`Array::take`](collections::contiguous::Array::take)
//! hands the buffer over without copying any elements and leaves an empty Array behind. The borrow
//! checker rules out assigning an Array to itself, so no runtime identity checks are needed.
//!
//! # Error Handling
//! Indexing is always bounds checked. The checked accessors return an
//! [`IndexOutOfBounds`](util::error::IndexOutOfBounds) error, while `arr[i]` panics with the same
//! message, in the same way as a slice would. Errors are strongly typed structs that implement
//! [`Error`](std::error::Error). Allocation failure isn't recoverable and is handed to
//! [`std::alloc::handle_alloc_error`].
//!
//! # Logging
//! Copies, ownership transfers and resets are reported at the `trace` level through the [`log`]
//! facade. Install any logger to see them.
//!
//! # Features
//! - `contiguous` (implies `collections`): [`Array`](collections::contiguous::Array) and
//!   [`array!`].
//! - `geometry`: [`Vector2D`](geometry::Vector2D).
//! - `pixel`: [`Rgb`](pixel::Rgb).
//!
//! All features are enabled by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "geometry")]
pub mod geometry;
#[cfg(feature = "pixel")]
pub mod pixel;

pub mod util;

/// Creates an [`Array`](collections::contiguous::Array) containing the arguments.
///
/// - `array![a, b, c]` creates an Array from a list of values, in order.
/// - `array![value; count]` creates an Array with `count` clones of `value`.
/// - `array![]` creates an empty Array.
///
/// # Examples
/// ```
/// # use owned_array::array;
/// let arr = array![1, 2, 3, 4];
/// assert_eq!(arr, [1, 2, 3, 4]);
///
/// let filled = array![0_u8; 5];
/// assert_eq!(filled.size(), 5);
/// ```
#[cfg(feature = "contiguous")]
#[macro_export]
macro_rules! array {
    () => {
        $crate::collections::contiguous::Array::new()
    };
    ($item:expr; $count:expr) => {
        $crate::collections::contiguous::Array::repeat_item($item, $count)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collections::contiguous::Array::from([$($item),+])
    };
}
