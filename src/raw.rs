//! Storage segments backing [`HybridVec`](crate::HybridVec).
//!
//! Exactly one segment exists at a time: the fixed inline block or an
//! exclusively owned heap buffer. Neither tracks element lifetimes; the
//! container drops live elements before a segment is replaced or destroyed.

use core::alloc::Layout;
use core::mem::MaybeUninit;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc, handle_alloc_error};

/// An owned heap buffer of exactly `cap` slots.
///
/// The buffer is raw capacity only. Dropping it releases the allocation
/// without running element destructors.
pub(crate) struct HeapBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> HeapBuf<T> {
    /// Allocates a buffer of exactly `cap` slots.
    ///
    /// Allocation failure is fatal and reported through
    /// [`handle_alloc_error`]; a zero-size layout (zero-sized `T`) uses a
    /// dangling pointer and never touches the allocator.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let layout = match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        };
        if layout.size() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap,
            };
        }
        // SAFETY: the layout has non-zero size.
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw as *mut T) else {
            handle_alloc_error(layout);
        };
        Self { ptr, cap }
    }

    #[inline(always)]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for HeapBuf<T> {
    fn drop(&mut self) {
        // Cannot overflow: the same product was checked at allocation time.
        let size = size_of::<T>() * self.cap;
        if size == 0 {
            return;
        }
        // SAFETY: matches the layout the buffer was allocated with.
        unsafe {
            let layout = Layout::from_size_align_unchecked(size, align_of::<T>());
            dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}

/// The active storage of a [`HybridVec`](crate::HybridVec): either the
/// fixed-capacity inline block or the overflow heap buffer.
pub(crate) enum Segment<T, const N: usize> {
    Inline([MaybeUninit<T>; N]),
    Heap(HeapBuf<T>),
}

impl<T, const N: usize> Segment<T, N> {
    /// A fresh, fully uninitialized inline segment.
    #[inline]
    pub(crate) const fn inline() -> Self {
        // SAFETY: an array of `MaybeUninit` needs no initialization.
        Self::Inline(unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() })
    }

    #[inline(always)]
    pub(crate) const fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }

    #[inline(always)]
    pub(crate) const fn capacity(&self) -> usize {
        match self {
            Self::Inline(_) => N,
            Self::Heap(buf) => buf.capacity(),
        }
    }

    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        match self {
            Self::Inline(buf) => buf as *const [MaybeUninit<T>; N] as *const T,
            Self::Heap(buf) => buf.as_ptr(),
        }
    }

    #[inline(always)]
    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        match self {
            Self::Inline(buf) => buf as *mut [MaybeUninit<T>; N] as *mut T,
            Self::Heap(buf) => buf.as_mut_ptr(),
        }
    }
}
