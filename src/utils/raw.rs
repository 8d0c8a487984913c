//! Raw memory, maybe uninitialized.

use super::root::{mem, ptr};

//  Raw memory, suitably sized for T.
//
//  A building block for the buffer of the Vector, it may be uninitialized.
//
//  Transparent, so that a slice of `Raw<T>` has the layout of a slice of `T`.
#[repr(transparent)]
pub struct Raw<T>(mem::MaybeUninit<T>);

impl<T> Raw<T> {
    //  Gets a reference to the value.
    //
    //  #   Safety
    //
    //  -   Assumes that the value is initialized.
    pub unsafe fn get(&self) -> &T { &*self.as_ptr() }

    //  Gets a mutable reference to the value.
    //
    //  #   Safety
    //
    //  -   Assumes that the value is initialized.
    pub unsafe fn get_mut(&mut self) -> &mut T { &mut *self.as_mut_ptr() }

    //  Gets a pointer to the value.
    //
    //  The value may not be initialized.
    pub fn as_ptr(&self) -> *const T { self.0.as_ptr() }

    //  Gets a mutable pointer to the value.
    //
    //  The value may not be initialized.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.0.as_mut_ptr() }

    //  Initializes the value.
    //
    //  #   Warning
    //
    //  Does not drop the former value, if any.
    pub fn write(&mut self, value: T) {
        self.0.write(value);
    }

    //  Moves the value out, leaving the slot logically uninitialized.
    //
    //  #   Safety
    //
    //  -   Assumes that the value is initialized.
    //  -   Assumes that the slot is not read again before being written to.
    pub unsafe fn read(&mut self) -> T {
        ptr::read(self.as_mut_ptr())
    }

    //  Drops the value within.
    //
    //  #   Safety
    //
    //  -   Assumes that the value is initialized.
    pub unsafe fn drop(&mut self) {
        ptr::drop_in_place(self.as_mut_ptr());
    }
}
