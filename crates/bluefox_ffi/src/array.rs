//! Array operations for C callers.

use bluefox_notation::Array;

use crate::handle::{
    borrow, borrow_mut, check_adoption, into_handle, length, position, take, write,
};
use crate::status::{BluefoxStatus, finish};
use crate::value::BluefoxValue;

/// Opaque array handle.
pub type BluefoxArray = Array;

/// Create an empty array
#[unsafe(no_mangle)]
pub extern "C" fn bluefox_new_array() -> *mut BluefoxArray {
    into_handle(Array::new())
}

/// Append a value, consuming the value handle
///
/// On success `value` is owned by the array and must not be used or released by the
/// caller. On failure ownership stays with the caller.
///
/// A value cannot be pushed into a container it owns, such as an array borrowed out of
/// `value` itself: that reports `InvalidOwnership` and leaves both untouched.
///
/// # Safety
/// `array` must be null or a live array handle (owned or borrowed); `value` must be null
/// or an owned value handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_array_push(
    array: *mut BluefoxArray,
    value: *mut BluefoxValue,
) -> BluefoxStatus {
    finish("bluefox_array_push", || unsafe {
        check_adoption(array, value)?;
        let array = borrow_mut(array)?;
        array.push(take(value)?);
        Ok(())
    })
}

/// Number of elements, or -1 for a null handle
///
/// # Safety
/// `array` must be null or a live array handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_array_len(array: *const BluefoxArray) -> i64 {
    unsafe { borrow(array) }.map_or(-1, |array| length(array.len()))
}

/// Borrow the element at `index`
///
/// Negative indexes and indexes at or past the length report `OutOfRange`. The value
/// handle written to `out` is borrowed and may be mutated in place; it stays valid until
/// the next push to this array.
///
/// # Safety
/// `array` must be null or a live array handle; `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_array_get(
    array: *mut BluefoxArray,
    index: i64,
    out: *mut *mut BluefoxValue,
) -> BluefoxStatus {
    finish("bluefox_array_get", || unsafe {
        let element = borrow_mut(array)?.get_mut(position(index)?)?;
        write(out, std::ptr::from_mut(element))?;
        Ok(())
    })
}

/// Release an array and everything inside it
///
/// Null is ignored.
///
/// # Safety
/// `array` must be null or an owned array handle that has not been released or wrapped
/// into a value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_release_array(array: *mut BluefoxArray) {
    if let Ok(array) = unsafe { take(array) } {
        array.release();
    }
}
