//! Hooks of the Vector.

use super::allocator;

/// VectorHooks
///
/// The hooks of a Vector decide where its buffer lives: every allocation and deallocation of the buffer is performed
/// through them.
///
/// A reference to hooks is itself hooks, so that multiple instances of `Vector` may share a single allocator.
///
/// Also see DefaultVectorHooks for the default, when the `with-std` feature is used.
pub trait VectorHooks: allocator::Allocator {}

impl<H: VectorHooks + ?Sized> VectorHooks for &H {}

/// DefaultVectorHooks
///
/// Default hooks for the Vector:
/// -   deferring allocation and deallocation to `DefaultAllocator`.
#[cfg(feature = "with-std")]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefaultVectorHooks(allocator::DefaultAllocator);

#[cfg(feature = "with-std")]
impl allocator::Allocator for DefaultVectorHooks {
    unsafe fn allocate(&self, layout: allocator::Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.0.allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: allocator::Layout) {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.0.deallocate(ptr, layout) }
    }
}

#[cfg(feature = "with-std")]
impl VectorHooks for DefaultVectorHooks {}
