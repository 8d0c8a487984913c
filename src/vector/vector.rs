//! The Vector

use super::root::{cmp, fmt, ops};

use super::buffer::Buffer;
use super::capacity::{Capacity, ElementIndex, Length, DEFAULT_CAPACITY};
use super::failure::{Failure, Result};
use super::hooks::VectorHooks;

#[cfg(feature = "with-std")]
use super::hooks::DefaultVectorHooks;

//
//  Public Interface
//

/// `Vector`
#[cfg(not(feature = "with-std"))]
pub struct Vector<T, H: VectorHooks> {
    hooks: H,
    length: usize,
    buffer: Buffer<T>,
}

/// `Vector`
#[cfg(feature = "with-std")]
pub struct Vector<T, H: VectorHooks = DefaultVectorHooks> {
    //  Hooks of the Vector.
    hooks: H,
    //  The number of elements in the vector; the first `length` slots of `buffer` are initialized.
    length: usize,
    buffer: Buffer<T>,
}

impl<T, H: VectorHooks + Default> Vector<T, H> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// ```
    pub fn new() -> Self {
        Self::with_hooks(H::default())
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::failure::Failure;
    /// #   use dynvec::vector::Vector;
    /// let vec: Vector<i32> = Vector::try_with_capacity(5).unwrap();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(5, vec.capacity());
    ///
    /// let vec = Vector::<i32>::try_with_capacity(usize::MAX);
    /// assert_eq!(Some(Failure::BytesOverflow), vec.err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_and_hooks(capacity, H::default())
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(panic_from_failure)
    }

    /// Creates a new, empty, instance with a capacity of `DEFAULT_CAPACITY`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::{Vector, DEFAULT_CAPACITY};
    /// let vec: Vector<i32> = Vector::try_with_default_capacity().unwrap();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(DEFAULT_CAPACITY, vec.capacity());
    /// ```
    pub fn try_with_default_capacity() -> Result<Self> {
        Self::try_with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty, instance with a capacity of `DEFAULT_CAPACITY`.
    ///
    /// Calling this method is equivalent to calling `try_with_default_capacity` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn with_default_capacity() -> Self {
        Self::try_with_default_capacity().unwrap_or_else(panic_from_failure)
    }
}

impl<T, H: VectorHooks> Vector<T, H> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::{Vector, DefaultVectorHooks};
    /// let vec: Vector<i32> = Vector::with_hooks(DefaultVectorHooks::default());
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// ```
    pub fn with_hooks(hooks: H) -> Self {
        Self { hooks, length: 0, buffer: Buffer::new() }
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_with_capacity_and_hooks(capacity: usize, hooks: H) -> Result<Self> {
        let mut result = Self::with_hooks(hooks);
        result.try_reserve(capacity)?;
        Ok(result)
    }

    /// Returns a reference to the hooks.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert!(vec.is_empty());
    ///
    /// vec.push_back(1);
    /// assert!(!vec.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert_eq!(0, vec.len());
    ///
    /// vec.push_back(1);
    /// assert_eq!(1, vec.len());
    /// ```
    pub fn len(&self) -> usize { self.length }

    /// Returns the number of elements the instance can hold without reallocating.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert_eq!(0, vec.capacity());
    ///
    /// vec.push_back(1);
    /// vec.push_back(2);
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.buffer.capacity().0 }

    /// Returns a reference to the ith element, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push_back(1);
    ///
    /// assert_eq!(Some(1), vec.get(0).copied());
    /// assert_eq!(None, vec.get(1));
    /// ```
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.length {
            return None;
        }

        //  Safety:
        //  -   `i` is within bounds.
        Some(unsafe { self.get_unchecked(i) })
    }

    /// Returns a reference to the ith element.
    ///
    /// #   Safety
    ///
    /// -   Assumes that i is a valid index.
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.length);

        //  Safety:
        //  -   The first `length` elements are initialized.
        unsafe { self.buffer.get_unchecked(ElementIndex(i)) }
    }

    /// Returns a mutable reference to the ith element, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push_back(1);
    ///
    /// if let Some(e) = vec.get_mut(0) {
    ///     *e = 3;
    /// }
    /// assert_eq!(3, vec[0]);
    /// ```
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.length {
            return None;
        }

        //  Safety:
        //  -   `i` is within bounds.
        Some(unsafe { self.get_unchecked_mut(i) })
    }

    /// Returns a mutable reference to the ith element.
    ///
    /// #   Safety
    ///
    /// -   Assumes that i is a valid index.
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.length);

        //  Safety:
        //  -   The first `length` elements are initialized.
        unsafe { self.buffer.get_unchecked_mut(ElementIndex(i)) }
    }

    /// Returns the elements, as a slice.
    ///
    /// The slice borrows the instance, and therefore cannot outlive any operation which may relocate the elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push_back(1);
    /// vec.push_back(2);
    ///
    /// assert_eq!(&[1, 2], vec.as_slice());
    /// ```
    pub fn as_slice(&self) -> &[T] {
        //  Safety:
        //  -   The first `length` elements are initialized.
        unsafe { self.buffer.initialized_slice(Length(self.length)) }
    }

    /// Returns the elements, as a mutable slice.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push_back(1);
    /// vec.push_back(2);
    ///
    /// vec.as_mut_slice().swap(0, 1);
    /// assert_eq!(&[2, 1], vec.as_slice());
    /// ```
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        //  Safety:
        //  -   The first `length` elements are initialized.
        unsafe { self.buffer.initialized_slice_mut(Length(self.length)) }
    }

    /// Clears the instance.
    ///
    /// All elements are dropped, and the memory is released: the instance is then exactly as if freshly created.
    ///
    /// Clearing an empty instance is a no-op.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push_back(1);
    /// vec.push_back(2);
    ///
    /// vec.clear();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// ```
    pub fn clear(&mut self) {
        self.truncate(Length(0));

        //  Safety:
        //  -   The buffer was allocated by `self.hooks`.
        //  -   No element is initialized.
        unsafe { self.buffer.deallocate(&self.hooks) };
    }

    /// Ensures that the capacity is at least `count`.
    ///
    /// Calling this method has no effect if the capacity is already sufficient, otherwise the elements are relocated
    /// into a buffer of exactly `count` slots.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left untouched.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::failure::Failure;
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(Ok(()), vec.try_reserve(6));
    /// assert_eq!(6, vec.capacity());
    ///
    /// //  Already sufficient.
    /// assert_eq!(Ok(()), vec.try_reserve(4));
    /// assert_eq!(6, vec.capacity());
    ///
    /// //  BytesOverflow signals that the size of the buffer to allocate, in bytes, cannot be represented.
    /// assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX));
    /// assert_eq!(6, vec.capacity());
    /// ```
    pub fn try_reserve(&mut self, count: usize) -> Result<()> {
        if count <= self.capacity() {
            return Ok(());
        }

        let fresh = Buffer::allocate(Capacity(count), &self.hooks)?;
        self.relocate(fresh);

        Ok(())
    }

    /// Ensures that the capacity is at least `count`.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn reserve(&mut self, count: usize) {
        self.try_reserve(count).unwrap_or_else(panic_from_failure);
    }

    /// Appends an element to the back.
    ///
    /// If the instance is full, its capacity is first grown to `2 * len + 1`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the value is not stored.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_push_back(3));
    /// assert_eq!(3, vec[0]);
    /// assert_eq!(1, vec.capacity());
    /// ```
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        self.try_grow()?;

        //  Safety:
        //  -   `length < capacity`, as guaranteed by `try_grow`.
        //  -   The slot at `length` is uninitialized.
        unsafe { self.buffer.write(ElementIndex(self.length), value) };

        self.length += 1;

        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// Calling this method is equivalent to calling `try_push_back` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).unwrap_or_else(panic_from_failure);
    }

    /// Removes the last element, and returns it.
    ///
    /// The capacity is left untouched.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if there is no element.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::failure::Failure;
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Err(Failure::Empty), vec.try_pop_back());
    ///
    /// vec.push_back(1);
    /// assert_eq!(Ok(1), vec.try_pop_back());
    /// assert_eq!(0, vec.len());
    /// assert_eq!(1, vec.capacity());
    /// ```
    pub fn try_pop_back(&mut self) -> Result<T> {
        if self.length == 0 {
            return Err(Failure::Empty);
        }

        self.length -= 1;

        //  Safety:
        //  -   The element at the former last index is initialized, and no longer accounted for.
        Ok(unsafe { self.buffer.read(ElementIndex(self.length)) })
    }

    /// Removes the last element, and returns it.
    ///
    /// Calling this method is equivalent to calling `try_pop_back` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if there is no element.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().unwrap_or_else(panic_from_failure)
    }

    /// Inserts an element before the element at `index`.
    ///
    /// The elements from `index` onwards are shifted one position to the right.
    ///
    /// Only existing elements can be inserted before: an `index` equal to `len` is rejected, use `push_back` to
    /// append.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfBounds` if `index` is not less than `len`, or an error if the memory cannot be
    /// allocated. In either case, the instance is left untouched.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::failure::Failure;
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push_back(1);
    /// vec.push_back(3);
    ///
    /// assert_eq!(Ok(()), vec.try_insert(1, 2));
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    ///
    /// assert_eq!(Err(Failure::OutOfBounds), vec.try_insert(3, 4));
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.length {
            return Err(Failure::OutOfBounds);
        }

        self.try_grow()?;

        //  Safety:
        //  -   `index < length < capacity`, as guaranteed by `try_grow`.
        //  -   The slot at index is uninitialized after the shift.
        unsafe {
            self.buffer.shift_right(ElementIndex(index), Length(self.length));
            self.buffer.write(ElementIndex(index), value);
        }

        self.length += 1;

        Ok(())
    }

    /// Inserts an element before the element at `index`.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is not less than `len`, or if the memory cannot be allocated.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).unwrap_or_else(panic_from_failure);
    }

    /// Removes the elements in the inclusive range `[leftmost, rightmost]`.
    ///
    /// The elements past `rightmost` are shifted left to fill the gap. The capacity is left untouched.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::InvalidRange` if `leftmost` is greater than `rightmost`, or `rightmost` is not less than
    /// `len`, in which case the instance is left untouched.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::failure::Failure;
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// for i in 0..6 {
    ///     vec.push_back(i);
    /// }
    ///
    /// assert_eq!(Ok(()), vec.try_erase_range(1, 3));
    /// assert_eq!(&[0, 4, 5], vec.as_slice());
    ///
    /// assert_eq!(Err(Failure::InvalidRange), vec.try_erase_range(2, 1));
    /// assert_eq!(Err(Failure::InvalidRange), vec.try_erase_range(1, 3));
    /// assert_eq!(&[0, 4, 5], vec.as_slice());
    /// ```
    pub fn try_erase_range(&mut self, leftmost: usize, rightmost: usize) -> Result<()> {
        if leftmost > rightmost || rightmost >= self.length {
            return Err(Failure::InvalidRange);
        }

        let length = self.length;

        //  Pre-pooping our pants in case a Drop panics: the tail is leaked, rather than dropped twice.
        self.length = leftmost;

        //  Safety:
        //  -   The range is within `[0, length)`, as checked above.
        //  -   The gap `[leftmost, rightmost]` is uninitialized once dropped.
        unsafe {
            self.buffer.drop_range(ElementIndex(leftmost), ElementIndex(rightmost + 1));
            self.buffer.shift_left(ElementIndex(rightmost + 1), ElementIndex(leftmost), Length(length));
        }

        self.length = length - (rightmost - leftmost + 1);

        Ok(())
    }

    /// Removes the elements in the inclusive range `[leftmost, rightmost]`.
    ///
    /// Calling this method is equivalent to calling `try_erase_range` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the range is invalid.
    pub fn erase_range(&mut self, leftmost: usize, rightmost: usize) {
        self.try_erase_range(leftmost, rightmost).unwrap_or_else(panic_from_failure);
    }

    /// Removes the element at `index`.
    ///
    /// Equivalent to `try_erase_range(index, index)`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::failure::Failure;
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push_back(1);
    /// vec.push_back(2);
    /// vec.push_back(3);
    ///
    /// assert_eq!(Ok(()), vec.try_erase(1));
    /// assert_eq!(&[1, 3], vec.as_slice());
    ///
    /// assert_eq!(Err(Failure::InvalidRange), vec.try_erase(2));
    /// ```
    pub fn try_erase(&mut self, index: usize) -> Result<()> {
        self.try_erase_range(index, index)
    }

    /// Removes the element at `index`.
    ///
    /// Calling this method is equivalent to calling `try_erase` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is not less than `len`.
    pub fn erase(&mut self, index: usize) {
        self.try_erase(index).unwrap_or_else(panic_from_failure);
    }

    //  Grows the instance if full, so that there is room for at least one more element.
    fn try_grow(&mut self) -> Result<()> {
        if self.length < self.capacity() {
            return Ok(());
        }

        let capacity = Capacity::grown(Length(self.length))?;
        self.try_reserve(capacity.0)
    }

    //  Relocates the buffer to exactly `count` slots, dropping the elements past `count`.
    //
    //  Either the relocation succeeds, or the instance is left untouched.
    fn try_reshape(&mut self, count: usize) -> Result<()> {
        if count == self.capacity() {
            return Ok(());
        }

        if count == 0 {
            self.clear();
            return Ok(());
        }

        let fresh = Buffer::allocate(Capacity(count), &self.hooks)?;

        self.truncate(Length(cmp::min(count, self.length)));
        self.relocate(fresh);

        Ok(())
    }

    //  Moves the elements into `fresh`, and deallocates the former buffer.
    fn relocate(&mut self, fresh: Buffer<T>) {
        //  Safety:
        //  -   The first `length` elements are initialized, and the others are not.
        //  -   `fresh` was just allocated, and holds at least `length` slots.
        let mut former = unsafe { self.buffer.replace(fresh, Length(self.length)) };

        //  Safety:
        //  -   The former buffer was allocated by `self.hooks`.
        //  -   Its elements were all moved out.
        unsafe { former.deallocate(&self.hooks) };
    }

    //  Drops the elements past `length`, if any.
    fn truncate(&mut self, length: Length) {
        if length.0 >= self.length {
            return;
        }

        let former = self.length;

        //  Pre-pooping our pants in case a Drop panics.
        self.length = length.0;

        //  Safety:
        //  -   The elements in `[length, former)` are initialized, and no longer accounted for.
        unsafe { self.buffer.drop_range(ElementIndex(length.0), ElementIndex(former)) };
    }
}

impl<T: Default, H: VectorHooks> Vector<T, H> {
    /// Forcibly resizes the instance to exactly `count` elements, and a capacity of exactly `count`.
    ///
    /// If `count` is less than `len`, the elements past `count` are dropped; otherwise, the new elements are
    /// default-initialized, that is zero for numbers.
    ///
    /// Resizing to 0 never fails, and releases the memory.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left untouched.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(Ok(()), vec.try_resize(3));
    /// assert_eq!(&[0, 0, 0], vec.as_slice());
    /// assert_eq!(3, vec.capacity());
    ///
    /// vec[0] = 4;
    ///
    /// assert_eq!(Ok(()), vec.try_resize(1));
    /// assert_eq!(&[4], vec.as_slice());
    /// assert_eq!(1, vec.capacity());
    /// ```
    pub fn try_resize(&mut self, count: usize) -> Result<()> {
        self.try_reshape(count)?;

        while self.length < count {
            //  Safety:
            //  -   `length < count == capacity`.
            //  -   The slot at `length` is uninitialized.
            unsafe { self.buffer.write(ElementIndex(self.length), T::default()) };

            self.length += 1;
        }

        Ok(())
    }

    /// Forcibly resizes the instance to exactly `count` elements.
    ///
    /// Calling this method is equivalent to calling `try_resize` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn resize(&mut self, count: usize) {
        self.try_resize(count).unwrap_or_else(panic_from_failure);
    }
}

impl<T: Clone, H: VectorHooks> Vector<T, H> {
    /// Replaces the content of the instance with `count` copies of `value`, with a capacity of exactly `count`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left untouched.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(Ok(()), vec.try_assign(5, 7));
    /// assert_eq!(&[7, 7, 7, 7, 7], vec.as_slice());
    /// assert_eq!(5, vec.capacity());
    /// ```
    pub fn try_assign(&mut self, count: usize, value: T) -> Result<()> {
        self.try_reshape(count)?;

        for e in self.as_mut_slice() {
            e.clone_from(&value);
        }

        while self.length < count {
            //  Safety:
            //  -   `length < count == capacity`.
            //  -   The slot at `length` is uninitialized.
            unsafe { self.buffer.write(ElementIndex(self.length), value.clone()) };

            self.length += 1;
        }

        Ok(())
    }

    /// Replaces the content of the instance with `count` copies of `value`.
    ///
    /// Calling this method is equivalent to calling `try_assign` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn assign(&mut self, count: usize, value: T) {
        self.try_assign(count, value).unwrap_or_else(panic_from_failure);
    }
}

/// A `Vector<T>` can be `Send` across threads whenever a `Vec<T>` can.
///
/// #   Example of Send.
///
/// ```
/// # use dynvec::vector::Vector;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push_back("Hello".to_string());
///
/// ensure_send(vec);
/// ```
///
/// #   Example of not Send.
///
/// ```compile_fail
/// # use std::rc::Rc;
/// # use dynvec::vector::Vector;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push_back(Rc::new(3));
///
/// ensure_send(vec);
/// ```
unsafe impl<T: Send, H: VectorHooks + Send> Send for Vector<T, H> {}

/// A `Vector<T>` can be shared across threads whenever a `Vec<T>` can; shared access is read-only.
///
/// #   Example of not Sync.
///
/// ```compile_fail
/// # use std::cell::Cell;
/// # use dynvec::vector::Vector;
/// fn ensure_sync<T: Sync>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push_back(Cell::new(1));
///
/// ensure_sync(vec);
/// ```
unsafe impl<T: Sync, H: VectorHooks + Sync> Sync for Vector<T, H> {}

impl<T, H: VectorHooks> Drop for Vector<T, H> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, H: VectorHooks + Default> Default for Vector<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, H: VectorHooks> fmt::Debug for Vector<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Vector")
            .field("capacity", &self.capacity())
            .field("length", &self.length)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, H: VectorHooks, OH: VectorHooks> PartialEq<Vector<T, OH>> for Vector<T, H> {
    fn eq(&self, other: &Vector<T, OH>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, H: VectorHooks> Eq for Vector<T, H> {}

impl<T: PartialEq, H: VectorHooks> PartialEq<[T]> for Vector<T, H> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T, H: VectorHooks> ops::Index<usize> for Vector<T, H> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("Valid index")
    }
}

impl<T, H: VectorHooks> ops::IndexMut<usize> for Vector<T, H> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("Valid index")
    }
}

#[cold]
#[inline(never)]
fn panic_from_failure<R>(failure: Failure) -> R {
    panic!("{}", failure);
}

//  mod tests
