use core::error::Error;
use core::fmt;

/// Error returned by checked indexed access ([`at`](crate::HybridVec::at) /
/// [`at_mut`](crate::HybridVec::at_mut)) when the index is not in `[0, len)`.
///
/// This is the only recoverable error the container produces. Allocation
/// failure while growing the overflow buffer is fatal and reported through
/// [`alloc::alloc::handle_alloc_error`].
///
/// # Examples
///
/// ```
/// # use hybridvec::{hybridvec, HybridVec, OutOfRange};
/// let vec: HybridVec<i32, 4> = hybridvec![10, 20];
/// assert_eq!(vec.at(5), Err(OutOfRange { index: 5, len: 2 }));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutOfRange {
    /// The requested index.
    pub index: usize,
    /// The container length at the time of access.
    pub len: usize,
}

impl Error for OutOfRange {}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}
