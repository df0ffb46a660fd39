//! Data map operations for C callers.
//!
//! Keys are copied on insert; the caller keeps ownership of its key buffer.

use std::ffi::c_char;

use bluefox_notation::Data;

use crate::handle::{
    borrow, borrow_mut, check_adoption, into_handle, length, position, read_text, take, write,
    write_text,
};
use crate::status::{BluefoxStatus, finish};
use crate::value::BluefoxValue;

/// Opaque data handle.
pub type BluefoxData = Data;

/// Create an empty data map
#[unsafe(no_mangle)]
pub extern "C" fn bluefox_new_data() -> *mut BluefoxData {
    into_handle(Data::new())
}

/// Bind `key` to `value`, consuming the value handle
///
/// If `key` was already bound, its previous value is released and the key keeps its
/// position in enumeration order. On failure ownership of `value` stays with the caller.
///
/// A value cannot be inserted into a map it owns, however deeply nested: that reports
/// `InvalidOwnership` and leaves both untouched.
///
/// # Safety
/// `data` must be null or a live data handle (owned or borrowed); `key` must be null or
/// NUL-terminated; `value` must be null or an owned value handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_data_insert(
    data: *mut BluefoxData,
    key: *const c_char,
    value: *mut BluefoxValue,
) -> BluefoxStatus {
    finish("bluefox_data_insert", || unsafe {
        check_adoption(data, value)?;
        let data = borrow_mut(data)?;
        let key = read_text(key)?;
        data.insert(key, take(value)?);
        Ok(())
    })
}

/// Borrow the value bound to `key`
///
/// The value handle written to `out` is borrowed and may be mutated in place; it stays
/// valid until the next insert into this map.
///
/// # Safety
/// `data` must be null or a live data handle; `key` must be null or NUL-terminated; `out`
/// must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_data_get(
    data: *mut BluefoxData,
    key: *const c_char,
    out: *mut *mut BluefoxValue,
) -> BluefoxStatus {
    finish("bluefox_data_get", || unsafe {
        let key = read_text(key)?;
        let found = borrow_mut(data)?.get_mut(key)?;
        write(out, std::ptr::from_mut(found))?;
        Ok(())
    })
}

/// Number of entries, or -1 for a null handle
///
/// # Safety
/// `data` must be null or a live data handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_data_len(data: *const BluefoxData) -> i64 {
    unsafe { borrow(data) }.map_or(-1, |data| length(data.len()))
}

/// Borrow the entry at `index` in insertion order
///
/// Writes the key as UTF-8 bytes (not NUL-terminated) and a borrowed value handle.
///
/// # Safety
/// `data` must be null or a live data handle; every out-parameter must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_data_entry(
    data: *mut BluefoxData,
    index: i64,
    out_key: *mut *const c_char,
    out_key_len: *mut usize,
    out_value: *mut *mut BluefoxValue,
) -> BluefoxStatus {
    finish("bluefox_data_entry", || unsafe {
        let (key, value) = borrow_mut(data)?
            .get_index_mut(position(index)?)
            .ok_or(BluefoxStatus::OutOfRange)?;
        if out_value.is_null() {
            return Err(BluefoxStatus::NullArgument.into());
        }
        write_text(key, out_key, out_key_len)?;
        write(out_value, std::ptr::from_mut(value))?;
        Ok(())
    })
}

/// Release a data map and everything inside it
///
/// Null is ignored.
///
/// # Safety
/// `data` must be null or an owned data handle that has not been released or wrapped
/// into a value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bluefox_release_data(data: *mut BluefoxData) {
    if let Ok(data) = unsafe { take(data) } {
        data.release();
    }
}
