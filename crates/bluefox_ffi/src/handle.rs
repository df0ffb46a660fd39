//! Raw handle plumbing shared by the boundary functions.
//!
//! Handles are boxed values leaked to the caller. Owned handles come back through
//! [`take`] exactly once; borrowed handles point into a parent container and are only
//! ever dereferenced.

use std::ffi::{CStr, c_char};

use bluefox_notation::Value;

use crate::status::BluefoxStatus;

/// Leaks `value` as an owned handle.
pub(crate) fn into_handle<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Reclaims an owned handle, ending the caller's ownership.
///
/// # Safety
/// `ptr` must be null or an owned handle produced by [`into_handle`] that has not been
/// reclaimed yet.
pub(crate) unsafe fn take<T>(ptr: *mut T) -> Result<T, BluefoxStatus> {
    if ptr.is_null() {
        return Err(BluefoxStatus::NullArgument);
    }
    Ok(*unsafe { Box::from_raw(ptr) })
}

/// Borrows a handle for reading.
///
/// # Safety
/// `ptr` must be null or point to a live value.
pub(crate) unsafe fn borrow<'a, T>(ptr: *const T) -> Result<&'a T, BluefoxStatus> {
    unsafe { ptr.as_ref() }.ok_or(BluefoxStatus::NullArgument)
}

/// Borrows a handle for in-place mutation.
///
/// # Safety
/// `ptr` must be null or point to a live value with no other active borrow.
pub(crate) unsafe fn borrow_mut<'a, T>(ptr: *mut T) -> Result<&'a mut T, BluefoxStatus> {
    unsafe { ptr.as_mut() }.ok_or(BluefoxStatus::NullArgument)
}

/// Writes an out-parameter.
///
/// # Safety
/// `out` must be null or valid for a write of `T`.
pub(crate) unsafe fn write<T>(out: *mut T, value: T) -> Result<(), BluefoxStatus> {
    if out.is_null() {
        return Err(BluefoxStatus::NullArgument);
    }
    unsafe { out.write(value) };
    Ok(())
}

/// Reads caller text. The bytes are copied by whoever keeps them.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated buffer.
pub(crate) unsafe fn read_text<'a>(ptr: *const c_char) -> Result<&'a str, BluefoxStatus> {
    if ptr.is_null() {
        return Err(BluefoxStatus::NullArgument);
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| BluefoxStatus::InvalidText)
}

/// Hands back a borrowed view of stored text as pointer and byte length.
///
/// The text is not NUL-terminated.
///
/// # Safety
/// `out_ptr` and `out_len` must each be null or valid for a write.
pub(crate) unsafe fn write_text(
    text: &str,
    out_ptr: *mut *const c_char,
    out_len: *mut usize,
) -> Result<(), BluefoxStatus> {
    if out_ptr.is_null() || out_len.is_null() {
        return Err(BluefoxStatus::NullArgument);
    }
    unsafe {
        out_ptr.write(text.as_ptr().cast::<c_char>());
        out_len.write(text.len());
    }
    Ok(())
}

/// Returns true if `container` is `root`'s own payload or any container nested below it.
///
/// Walks the whole subtree, so the cost grows with the size of `root`.
pub(crate) fn encloses<T>(root: &Value, container: *const T) -> bool {
    let target = container.cast::<()>();
    let mut pending = vec![root];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(array) => {
                if std::ptr::eq(std::ptr::from_ref(array).cast::<()>(), target) {
                    return true;
                }
                pending.extend(array.iter());
            }
            Value::Data(data) => {
                if std::ptr::eq(std::ptr::from_ref(data).cast::<()>(), target) {
                    return true;
                }
                pending.extend(data.values());
            }
            _ => {}
        }
    }
    false
}

/// Checks that the owned `value` may move into `parent`.
///
/// Both handles must be non-null, and `parent` must not live inside `value`: taking
/// `value` would free the parent out from under the insert.
///
/// # Safety
/// `parent` must be null or a live container handle; `value` must be null or a live
/// value handle.
pub(crate) unsafe fn check_adoption<T>(
    parent: *const T,
    value: *const Value,
) -> Result<(), BluefoxStatus> {
    if parent.is_null() {
        return Err(BluefoxStatus::NullArgument);
    }
    let root = unsafe { borrow(value) }?;
    if encloses(root, parent) {
        return Err(BluefoxStatus::InvalidOwnership);
    }
    Ok(())
}

/// Converts a C index into a usable position, rejecting negatives.
pub(crate) fn position(index: i64) -> Result<usize, BluefoxStatus> {
    usize::try_from(index).map_err(|_| BluefoxStatus::OutOfRange)
}

/// Reports a length back to C.
pub(crate) fn length(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
