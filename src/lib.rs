//! ## Intro
//!
//! A vector that stores small collections inline inside the value itself and
//! spills to a heap buffer only when it has to.
//!
//! Similar to [`SmallVec`], but with a strict capacity discipline: the buffer
//! size is always a pure function of the element count, and the container
//! moves back inline as soon as it fits again.
//!
//! Many workloads have collections that fit comfortably in a small fixed
//! buffer but occasionally need to grow. Inline storage avoids allocator
//! traffic and keeps elements on the cache line of the owner; [`HybridVec`]
//! gives you that for the common case and a plain growable buffer for the
//! rest.
//!
//! ```
//! # use hybridvec::{HybridVec, hybridvec};
//! let mut vec: HybridVec<i32, 5> = hybridvec![1, 2, 3];
//! assert!(vec.is_inline());      // no allocation yet
//!
//! // Push beyond the inline capacity—automatically spills to the heap
//! vec.extend([4, 5, 6, 7, 8]);
//! assert!(!vec.is_inline());
//!
//! // Shrink back within the inline capacity—the buffer is released
//! vec.drain(5..);
//! assert!(vec.is_inline());
//! assert_eq!(vec, [1, 2, 3, 4, 5]);
//! ```
//!
//! ## Capacity policy
//!
//! - Inline mode holds up to `N` elements with capacity exactly `N`.
//! - The first growth past `N` allocates `3 * len / 2` slots, recomputed
//!   from the element count at every transition.
//! - Any removal that brings the count back to `N` or below moves the
//!   elements inline and releases the heap buffer.
//!
//! Storage mode is an implementation detail of each value: two containers
//! with equal elements compare equal regardless of where the elements live.
//!
//! Note: for persistently large collections a plain [`Vec`] is the better
//! tool; every `HybridVec` operation pays a mode check.
//!
//! ### Alias
//!
//! - [`DefaultHybridVec<T>`] = `HybridVec<T, 16>` — general-purpose balance
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`, making it suitable for
//! embedded and no_std environments.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, [`HybridVec`] implements the
//! [`serde::Serialize`] and [`serde::Deserialize`] traits, encoding the
//! elements as a plain sequence independent of storage mode.
//!
//! [`serde::Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`serde::Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [`SmallVec`]: https://docs.rs/smallvec/latest/smallvec
//! [`Vec`]: alloc::vec::Vec
#![no_std]

extern crate alloc;

mod errors;
mod raw;
mod utils;

pub mod hybrid_vec;

pub mod iter;

#[cfg(feature = "serde")]
mod serde;

#[doc(inline)]
pub use hybrid_vec::HybridVec;

#[doc(inline)]
pub use iter::{Drain, IntoIter};

pub use errors::OutOfRange;

/// A `HybridVec` with an inline capacity of 16 elements.
///
/// This is an alias for [`HybridVec<T, 16>`].
///
/// A balanced choice when the element count is usually small but unknown:
/// 16 elements fit inline before the first allocation, and the container
/// returns inline as soon as it shrinks back to 16 or fewer.
///
/// # Examples
///
/// ```
/// # use hybridvec::DefaultHybridVec;
/// let mut vec: DefaultHybridVec<i32> = DefaultHybridVec::new();
///
/// for i in 0..16 {
///     vec.push(i);
/// }
/// assert!(vec.is_inline());
///
/// vec.push(16);
/// assert!(!vec.is_inline());
/// ```
pub type DefaultHybridVec<T> = HybridVec<T, 16>;
