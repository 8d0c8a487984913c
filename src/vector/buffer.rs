//! The contiguous buffer of the vector.

use super::root::{hint, marker, mem, ptr, slice};

use super::allocator::{Allocator, Layout};
use super::capacity::{Capacity, ElementIndex, Length};
use super::failure::{Failure, Result};
use super::raw::Raw;

//  The storage.
//
//  A pointer to `capacity` slots, null if and only if `capacity` is 0.
//
//  The Buffer neither knows how many of its slots are initialized, nor which allocator it was allocated with: both are
//  tracked by the Vector, and passed in as necessary.
pub struct Buffer<T> {
    ptr: *mut Raw<T>,
    capacity: Capacity,
    _marker: marker::PhantomData<T>,
}

impl<T> Buffer<T> {
    //  Creates an unallocated instance.
    //
    //  #   Panics
    //
    //  Panics if `T` is zero-sized.
    pub fn new() -> Self {
        if mem::size_of::<T>() == 0 {
            panic_zero_sized_element();
        }

        Self { ptr: ptr::null_mut(), capacity: Capacity(0), _marker: marker::PhantomData }
    }

    //  Allocates an instance of exactly `capacity` slots, all uninitialized.
    //
    //  A capacity of 0 does not allocate.
    //
    //  #   Errors
    //
    //  Returns an error if the layout cannot be computed, or the allocator fails.
    pub fn allocate<A: Allocator>(capacity: Capacity, allocator: &A) -> Result<Self> {
        let mut result = Self::new();

        if capacity.0 == 0 {
            return Ok(result);
        }

        let layout = Self::allocation_layout(capacity)?;

        //  Safety:
        //  -   The layout is valid, and of non-zero size.
        let ptr = unsafe { allocator.allocate(layout) };

        if ptr.is_null() { return Err(Failure::OutOfMemory) }

        //  The allocator honours the alignment of the layout.
        result.ptr = ptr as *mut Raw<T>;
        result.capacity = capacity;

        Ok(result)
    }

    //  Returns the capacity.
    pub fn capacity(&self) -> Capacity { self.capacity }

    //  Returns whether the buffer is allocated, or not.
    pub fn is_allocated(&self) -> bool { !self.ptr.is_null() }

    //  Deallocates the buffer, if allocated.
    //
    //  The elements are not dropped.
    //
    //  #   Safety
    //
    //  -   Assumes that the buffer was allocated by `allocator`.
    //  -   Assumes that no element is initialized.
    pub unsafe fn deallocate<A: Allocator>(&mut self, allocator: &A) {
        if !self.is_allocated() {
            return;
        }

        let layout = match Self::allocation_layout(self.capacity) {
            Ok(layout) => layout,
            Err(_) => {
                //  Safety:
                //  -   Cannot error, it succeeded during the allocation.
                debug_assert!(false, "{:?} succeeded in allocation!", self.capacity);
                hint::unreachable_unchecked()
            },
        };

        //  Safety:
        //  -   The pointer matches the pointer of the allocation.
        //  -   The layout matches the layout of the allocation.
        allocator.deallocate(self.ptr as *mut u8, layout);

        self.ptr = ptr::null_mut();
        self.capacity = Capacity(0);
    }

    //  Moves the first `length` elements into `fresh`, then swaps `fresh` in.
    //
    //  Returns the former buffer, whose elements are all uninitialized, for the caller to deallocate.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` elements are initialized, and the others are not.
    //  -   Assumes that `fresh` has no initialized element.
    pub unsafe fn replace(&mut self, mut fresh: Self, length: Length) -> Self {
        debug_assert!(length.0 <= self.capacity.0);
        debug_assert!(length.0 <= fresh.capacity.0);

        if length.0 > 0 {
            //  Safety:
            //  -   Both buffers hold at least `length` slots.
            //  -   Distinct allocations cannot overlap.
            ptr::copy_nonoverlapping(self.ptr, fresh.ptr, length.0);
        }

        mem::swap(self, &mut fresh);

        fresh
    }

    //  Gets a reference to the element at index.
    //
    //  #   Safety
    //
    //  -   Assumes that the element at index is initialized.
    pub unsafe fn get_unchecked(&self, index: ElementIndex) -> &T {
        debug_assert!(index.0 < self.capacity.0);

        //  Safety:
        //  -   The buffer contains at least index+1 elements.
        let raw: &Raw<T> = &*self.ptr.add(index.0);

        //  Safety:
        //  -   The element is assumed to be initialized.
        raw.get()
    }

    //  Gets a mutable reference to the element at index.
    //
    //  #   Safety
    //
    //  -   Assumes that the element at index is initialized.
    pub unsafe fn get_unchecked_mut(&mut self, index: ElementIndex) -> &mut T {
        //  Safety:
        //  -   The element is assumed to be initialized.
        self.slot_mut(index).get_mut()
    }

    //  Returns a slice to the first length elements.
    //
    //  #   Safety
    //
    //  -   Assumes that the first length elements are initialized.
    pub unsafe fn initialized_slice(&self, length: Length) -> &[T] {
        if length.0 == 0 {
            return &[];
        }

        debug_assert!(length.0 <= self.capacity.0);

        //  Safety:
        //  -   `Raw<T>` is transparent over `T`.
        //  -   The first length elements are assumed to be initialized.
        slice::from_raw_parts(self.ptr as *const T, length.0)
    }

    //  Returns a slice to the first length elements.
    //
    //  #   Safety
    //
    //  -   Assumes that the first length elements are initialized.
    pub unsafe fn initialized_slice_mut(&mut self, length: Length) -> &mut [T] {
        if length.0 == 0 {
            return &mut [];
        }

        debug_assert!(length.0 <= self.capacity.0);

        //  Safety:
        //  -   `Raw<T>` is transparent over `T`.
        //  -   Exclusive access is guaranteed by `&mut self`.
        //  -   The first length elements are assumed to be initialized.
        slice::from_raw_parts_mut(self.ptr as *mut T, length.0)
    }

    //  Initializes the element at index.
    //
    //  #   Safety
    //
    //  -   Assumes that index is less than the capacity.
    //  -   Assumes that the element at index is not initialized; it is not dropped.
    pub unsafe fn write(&mut self, index: ElementIndex, value: T) {
        self.slot_mut(index).write(value);
    }

    //  Moves the element at index out.
    //
    //  #   Safety
    //
    //  -   Assumes that the element at index is initialized.
    //  -   Assumes that the element at index is considered uninitialized afterwards.
    pub unsafe fn read(&mut self, index: ElementIndex) -> T {
        self.slot_mut(index).read()
    }

    //  Drops the elements in `[from, to)`.
    //
    //  #   Safety
    //
    //  -   Assumes that the elements in `[from, to)` are initialized.
    //  -   Assumes that they are considered uninitialized afterwards, even if a Drop panics.
    pub unsafe fn drop_range(&mut self, from: ElementIndex, to: ElementIndex) {
        debug_assert!(from.0 <= to.0);
        debug_assert!(to.0 <= self.capacity.0);

        if from.0 == to.0 {
            return;
        }

        //  Safety:
        //  -   The buffer contains at least `to` slots.
        let slice: &mut [Raw<T>] = slice::from_raw_parts_mut(self.ptr.add(from.0), to.0 - from.0);

        for e in slice {
            //  Safety:
            //  -   The elements are assumed to be initialized.
            e.drop();
        }
    }

    //  Moves the elements in `[index, length)` one slot to the right, to `[index + 1, length + 1)`.
    //
    //  The slot at index is uninitialized afterwards.
    //
    //  #   Safety
    //
    //  -   Assumes that index is less than, or equal to, length.
    //  -   Assumes that length is less than the capacity.
    pub unsafe fn shift_right(&mut self, index: ElementIndex, length: Length) {
        debug_assert!(index.0 <= length.0);
        debug_assert!(length.0 < self.capacity.0);

        let source = self.ptr.add(index.0);

        //  Safety:
        //  -   Both ranges are within the buffer.
        //  -   `ptr::copy` handles overlap.
        ptr::copy(source, source.add(1), length.0 - index.0);
    }

    //  Moves the elements in `[from, length)` left, so that the first lands at `to`.
    //
    //  The slots in `[length - (from - to), length)` are uninitialized afterwards.
    //
    //  #   Safety
    //
    //  -   Assumes that `to <= from <= length <= capacity`.
    //  -   Assumes that the elements in `[to, from)` are uninitialized.
    pub unsafe fn shift_left(&mut self, from: ElementIndex, to: ElementIndex, length: Length) {
        debug_assert!(to.0 <= from.0);
        debug_assert!(from.0 <= length.0);
        debug_assert!(length.0 <= self.capacity.0);

        if from.0 == length.0 || to.0 == from.0 {
            return;
        }

        //  Safety:
        //  -   Both ranges are within the buffer.
        //  -   `ptr::copy` handles overlap.
        ptr::copy(self.ptr.add(from.0), self.ptr.add(to.0), length.0 - from.0);
    }

    //  Gets a mutable reference to the slot at index.
    //
    //  #   Safety
    //
    //  -   Assumes that index is less than the capacity.
    unsafe fn slot_mut(&mut self, index: ElementIndex) -> &mut Raw<T> {
        debug_assert!(index.0 < self.capacity.0);

        //  Safety:
        //  -   The buffer contains at least index+1 slots.
        //  -   The access is exclusive, as per &mut self.
        &mut *self.ptr.add(index.0)
    }

    //  Computes the layout for a given capacity.
    //
    //  #   Fails
    //
    //  -   If the necessary size overflows.
    fn allocation_layout(capacity: Capacity) -> Result<Layout> {
        let size = mem::size_of::<Raw<T>>();
        let alignment = mem::align_of::<Raw<T>>();

        match capacity.0.checked_mul(size) {
            //  A size exceeding `isize::MAX`, once rounded to the alignment, is rejected by `Layout` itself.
            Some(result) => Layout::from_size_align(result, alignment).map_err(|_| Failure::BytesOverflow),
            None => Err(Failure::BytesOverflow),
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self { Self::new() }
}

#[cold]
#[inline(never)]
fn panic_zero_sized_element() -> ! {
    panic!("Zero-sized elements are not supported");
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::*;

fn fill<'a>(buffer: &mut Buffer<SpyElement<'a>>, count: &'a SpyCount, length: usize) {
    for i in 0..length {
        unsafe { buffer.write(ElementIndex(i), SpyElement::with_value(count, i)) };
    }
}

fn values(buffer: &Buffer<SpyElement<'_>>, length: usize) -> Vec<usize> {
    unsafe { buffer.initialized_slice(Length(length)) }.iter()
        .map(|e| e.value())
        .collect()
}

#[test]
fn buffer_allocation_layout() {
    fn allocation_layout<T>(capacity: usize) -> Result<usize> {
        match Buffer::<T>::allocation_layout(Capacity(capacity)) {
            Ok(layout) => {
                assert_eq!(mem::align_of::<T>(), layout.align());
                Ok(layout.size())
            },
            Err(error) => Err(error),
        }
    }

    assert_eq!(Ok(8), allocation_layout::<u64>(1));
    assert_eq!(Ok(32), allocation_layout::<u64>(4));
    assert_eq!(Ok(32), allocation_layout::<[u64; 4]>(1));
    assert_eq!(Ok(12), allocation_layout::<[u8; 3]>(4));

    assert_eq!(Err(Failure::BytesOverflow), allocation_layout::<u64>(usize::MAX / 8 + 1));
    assert_eq!(Err(Failure::BytesOverflow), allocation_layout::<u64>(usize::MAX / 8));
}

#[test]
#[should_panic]
fn buffer_zero_sized() {
    Buffer::<()>::new();
}

#[test]
fn buffer_allocate_nothing() {
    let allocator = TestAllocator::default();

    let buffer = Buffer::<u32>::allocate(Capacity(0), &allocator).unwrap();

    assert!(!buffer.is_allocated());
    assert_eq!(Capacity(0), buffer.capacity());
    assert!(allocator.allocations().is_empty());
}

#[test]
fn buffer_allocate_failure() {
    let allocator = TestAllocator::default();

    let allocated = Buffer::<u32>::allocate(Capacity(1), &allocator);

    assert_eq!(Some(Failure::OutOfMemory), allocated.err());
}

#[test]
fn buffer_allocate_success() {
    let allocator = TestAllocator::default();
    allocator.allowed.set(1);

    let mut buffer = Buffer::<u64>::allocate(Capacity(3), &allocator).unwrap();

    assert!(buffer.is_allocated());
    assert_eq!(Capacity(3), buffer.capacity());

    let allocation = allocator.allocations().last().copied().unwrap();

    assert_eq!(3 * mem::size_of::<u64>(), allocation.size);
    assert_eq!(mem::align_of::<u64>(), allocation.alignment);

    unsafe { buffer.deallocate(&allocator) };

    assert!(!buffer.is_allocated());
    assert_eq!(Capacity(0), buffer.capacity());
    assert!(allocator.allocations().is_empty());
}

#[test]
fn buffer_replace() {
    let allocator = TestAllocator::default();
    allocator.allowed.set(2);

    let count = SpyCount::zero();

    let mut buffer = Buffer::allocate(Capacity(3), &allocator).unwrap();
    fill(&mut buffer, &count, 3);

    let fresh = Buffer::allocate(Capacity(5), &allocator).unwrap();
    let mut former = unsafe { buffer.replace(fresh, Length(3)) };

    assert_eq!(Capacity(5), buffer.capacity());
    assert_eq!(Capacity(3), former.capacity());
    assert_eq!(vec![0, 1, 2], values(&buffer, 3));
    assert_eq!(3, count.get());

    unsafe { former.deallocate(&allocator) };
    assert_eq!(1, allocator.allocations().len());

    unsafe { buffer.drop_range(ElementIndex(0), ElementIndex(3)) };
    assert_eq!(0, count.get());

    unsafe { buffer.deallocate(&allocator) };
}

#[test]
fn buffer_drop_range() {
    let allocator = TestAllocator::default();
    allocator.allowed.set(1);

    let count = SpyCount::zero();

    let mut buffer = Buffer::allocate(Capacity(5), &allocator).unwrap();
    fill(&mut buffer, &count, 5);

    unsafe { buffer.drop_range(ElementIndex(1), ElementIndex(1)) };
    assert_eq!(5, count.get());

    unsafe { buffer.drop_range(ElementIndex(1), ElementIndex(3)) };
    assert_eq!(3, count.get());

    unsafe { buffer.drop_range(ElementIndex(0), ElementIndex(1)) };
    unsafe { buffer.drop_range(ElementIndex(3), ElementIndex(5)) };
    assert_eq!(0, count.get());

    unsafe { buffer.deallocate(&allocator) };
}

#[test]
fn buffer_shift_right() {
    let allocator = TestAllocator::default();
    allocator.allowed.set(1);

    let count = SpyCount::zero();

    let mut buffer = Buffer::allocate(Capacity(5), &allocator).unwrap();
    fill(&mut buffer, &count, 4);

    unsafe {
        buffer.shift_right(ElementIndex(1), Length(4));
        buffer.write(ElementIndex(1), SpyElement::with_value(&count, 9));
    }

    assert_eq!(vec![0, 9, 1, 2, 3], values(&buffer, 5));

    unsafe {
        buffer.drop_range(ElementIndex(0), ElementIndex(5));
        buffer.deallocate(&allocator);
    }

    assert_eq!(0, count.get());
}

#[test]
fn buffer_shift_left() {
    let allocator = TestAllocator::default();
    allocator.allowed.set(1);

    let count = SpyCount::zero();

    let mut buffer = Buffer::allocate(Capacity(6), &allocator).unwrap();
    fill(&mut buffer, &count, 6);

    unsafe {
        buffer.drop_range(ElementIndex(1), ElementIndex(3));
        buffer.shift_left(ElementIndex(3), ElementIndex(1), Length(6));
    }

    assert_eq!(vec![0, 3, 4, 5], values(&buffer, 4));
    assert_eq!(4, count.get());

    unsafe {
        buffer.drop_range(ElementIndex(0), ElementIndex(4));
        buffer.deallocate(&allocator);
    }

    assert_eq!(0, count.get());
}

#[test]
fn buffer_read() {
    let allocator = TestAllocator::default();
    allocator.allowed.set(1);

    let count = SpyCount::zero();

    let mut buffer = Buffer::allocate(Capacity(2), &allocator).unwrap();
    fill(&mut buffer, &count, 2);

    let last = unsafe { buffer.read(ElementIndex(1)) };
    assert_eq!(1, last.value());
    assert_eq!(2, count.get());

    drop(last);
    assert_eq!(1, count.get());

    unsafe {
        *buffer.get_unchecked_mut(ElementIndex(0)) = SpyElement::with_value(&count, 7);
        assert_eq!(7, buffer.get_unchecked(ElementIndex(0)).value());

        buffer.drop_range(ElementIndex(0), ElementIndex(1));
        buffer.deallocate(&allocator);
    }

    assert_eq!(0, count.get());
}

}
