//! Value constructors and typed extraction.
//!
//! Constructors return owned handles. String and function constructors copy the caller's
//! text. Container constructors consume the container handle: after the call it is
//! freed and must not be used or released again.

use std::ffi::{c_char, c_int};

use bluefox_notation::{Array, Data, Value};

use crate::handle::{borrow, borrow_mut, into_handle, read_text, take, write, write_text};
use crate::status::{BluefoxStatus, finish};

/// Opaque value handle.
pub type BluefoxValue = Value;

/// Create a null value
#[unsafe(no_mangle)]
pub extern "C" fn bluefox_new_null() -> *mut BluefoxValue {
    into_handle(Value::Null)
}

/// Create a boolean value
#[unsafe(no_mangle)]
pub extern "C" fn bluefox_new_bool(b: bool) -> *mut BluefoxValue {
    into_handle(Value::Bool(b))
}

/// Create an integer value
#[unsafe(no_mangle)]
pub extern "C" fn bluefox_new_int(n: i64) -> *mut BluefoxValue {
    into_handle(Value::Int(n))
}

/// Create a float value
#[unsafe(no_mangle)]
pub extern "C" fn bluefox_new_float(f: f64) -> *mut BluefoxValue {
    into_handle(Value::Float(f))
}

/// Create a string value from a copy of `text`
///
/// Returns null if `text` is null or not valid UTF-8.
///
/// # Safety
/// `text` must be null or a NUL-terminated buffer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_new_string(text: *const c_char) -> *mut BluefoxValue {
    let mut handle = std::ptr::null_mut();
    finish("bluefox_new_string", || {
        handle = into_handle(Value::string(unsafe { read_text(text) }?));
        Ok(())
    });
    handle
}

/// Create a function-reference value from a copy of `name`
///
/// Returns null if `name` is null or not valid UTF-8.
///
/// # Safety
/// `name` must be null or a NUL-terminated buffer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_new_function(name: *const c_char) -> *mut BluefoxValue {
    let mut handle = std::ptr::null_mut();
    finish("bluefox_new_function", || {
        handle = into_handle(Value::function(unsafe { read_text(name) }?));
        Ok(())
    });
    handle
}

/// Wrap an array in a value, consuming the array handle
///
/// Returns null if `array` is null.
///
/// # Safety
/// `array` must be null or an owned array handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_new_array_value(array: *mut Array) -> *mut BluefoxValue {
    let mut handle = std::ptr::null_mut();
    finish("bluefox_new_array_value", || {
        handle = into_handle(Value::Array(unsafe { take(array) }?));
        Ok(())
    });
    handle
}

/// Wrap a data map in a value, consuming the data handle
///
/// Returns null if `data` is null.
///
/// # Safety
/// `data` must be null or an owned data handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_new_data_value(data: *mut Data) -> *mut BluefoxValue {
    let mut handle = std::ptr::null_mut();
    finish("bluefox_new_data_value", || {
        handle = into_handle(Value::Data(unsafe { take(data) }?));
        Ok(())
    });
    handle
}

/// Tag code of a value (0 = null .. 7 = data), or -1 for a null handle
///
/// # Safety
/// `value` must be null or a live value handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_kind(value: *const BluefoxValue) -> c_int {
    match unsafe { borrow(value) } {
        Ok(value) => c_int::from(value.kind().code()),
        Err(_) => -1,
    }
}

/// Returns true iff `value` is a null value. A null handle is not a null value.
///
/// # Safety
/// `value` must be null or a live value handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_is_null(value: *const BluefoxValue) -> bool {
    unsafe { borrow(value) }.is_ok_and(Value::is_null)
}

/// Read a boolean into `out`
///
/// # Safety
/// `value` must be null or a live value handle; `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_get_bool(
    value: *const BluefoxValue,
    out: *mut bool,
) -> BluefoxStatus {
    finish("bluefox_value_get_bool", || unsafe {
        let b = borrow(value)?.get_bool()?;
        write(out, b)?;
        Ok(())
    })
}

/// Read an integer into `out`
///
/// # Safety
/// `value` must be null or a live value handle; `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_get_int(
    value: *const BluefoxValue,
    out: *mut i64,
) -> BluefoxStatus {
    finish("bluefox_value_get_int", || unsafe {
        let n = borrow(value)?.get_int()?;
        write(out, n)?;
        Ok(())
    })
}

/// Read a float into `out`
///
/// # Safety
/// `value` must be null or a live value handle; `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_get_float(
    value: *const BluefoxValue,
    out: *mut f64,
) -> BluefoxStatus {
    finish("bluefox_value_get_float", || unsafe {
        let f = borrow(value)?.get_float()?;
        write(out, f)?;
        Ok(())
    })
}

/// Borrow a string payload as UTF-8 bytes (not NUL-terminated)
///
/// The view stays valid until the value is mutated or released.
///
/// # Safety
/// `value` must be null or a live value handle; `out_ptr` and `out_len` must be null or
/// writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_get_string(
    value: *const BluefoxValue,
    out_ptr: *mut *const c_char,
    out_len: *mut usize,
) -> BluefoxStatus {
    finish("bluefox_value_get_string", || unsafe {
        let text = borrow(value)?.get_string()?;
        write_text(text, out_ptr, out_len)?;
        Ok(())
    })
}

/// Borrow a function identifier as UTF-8 bytes (not NUL-terminated)
///
/// # Safety
/// Same as [`bluefox_value_get_string`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_get_function(
    value: *const BluefoxValue,
    out_ptr: *mut *const c_char,
    out_len: *mut usize,
) -> BluefoxStatus {
    finish("bluefox_value_get_function", || unsafe {
        let name = borrow(value)?.get_function_ref()?;
        write_text(name, out_ptr, out_len)?;
        Ok(())
    })
}

/// Borrow the array inside a value
///
/// The array handle written to `out` is borrowed: it may be pushed to or read, but must
/// never be released or wrapped into another value.
///
/// # Safety
/// `value` must be null or a live value handle; `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_get_array(
    value: *mut BluefoxValue,
    out: *mut *mut Array,
) -> BluefoxStatus {
    finish("bluefox_value_get_array", || unsafe {
        let array = borrow_mut(value)?.get_array_mut()?;
        write(out, std::ptr::from_mut(array))?;
        Ok(())
    })
}

/// Borrow the data map inside a value
///
/// The data handle written to `out` is borrowed, as with [`bluefox_value_get_array`].
///
/// # Safety
/// `value` must be null or a live value handle; `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_get_data(
    value: *mut BluefoxValue,
    out: *mut *mut Data,
) -> BluefoxStatus {
    finish("bluefox_value_get_data", || unsafe {
        let data = borrow_mut(value)?.get_data_mut()?;
        write(out, std::ptr::from_mut(data))?;
        Ok(())
    })
}

/// Resolve a path such as `items[2].name` below a value
///
/// The value handle written to `out` is borrowed.
///
/// # Safety
/// `value` must be null or a live value handle; `path` must be null or NUL-terminated;
/// `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_value_lookup(
    value: *mut BluefoxValue,
    path: *const c_char,
    out: *mut *mut BluefoxValue,
) -> BluefoxStatus {
    finish("bluefox_value_lookup", || unsafe {
        let path = read_text(path)?;
        let found = borrow_mut(value)?.lookup_mut(path)?;
        write(out, std::ptr::from_mut(found))?;
        Ok(())
    })
}

/// Release a value and everything nested inside it
///
/// Null is ignored.
///
/// # Safety
/// `value` must be null or an owned value handle that has not been released or moved
/// into a container. Borrowed handles must never be passed here.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_release_value(value: *mut BluefoxValue) {
    if let Ok(value) = unsafe { take(value) } {
        value.release();
    }
}
