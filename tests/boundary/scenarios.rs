//! End-to-end boundary scenarios
//!
//! Builds and reads nested documents entirely through the C ABI.

use std::ffi::c_char;

use bluefox_ffi::*;

use crate::{c, init_tracing, text};

#[test]
fn replace_int_with_string() {
    init_tracing();
    let x = c("x");
    let five = c("five");
    unsafe {
        let data = bluefox_new_data();
        assert_eq!(
            bluefox_data_insert(data, x.as_ptr(), bluefox_new_int(5)),
            BluefoxStatus::Ok
        );
        assert_eq!(
            bluefox_data_insert(data, x.as_ptr(), bluefox_new_string(five.as_ptr())),
            BluefoxStatus::Ok
        );
        assert_eq!(bluefox_data_len(data), 1);

        let mut value: *mut BluefoxValue = std::ptr::null_mut();
        assert_eq!(bluefox_data_get(data, x.as_ptr(), &mut value), BluefoxStatus::Ok);
        let mut ptr: *const c_char = std::ptr::null();
        let mut len = 0usize;
        assert_eq!(
            bluefox_value_get_string(value, &mut ptr, &mut len),
            BluefoxStatus::Ok
        );
        assert_eq!(text(ptr, len), "five");
        let mut n = 0i64;
        assert_eq!(bluefox_value_get_int(value, &mut n), BluefoxStatus::TypeMismatch);
        bluefox_release_data(data);
    }
}

#[test]
fn nested_document_via_lookup() {
    init_tracing();
    let (a, b) = (c("a"), c("b"));
    unsafe {
        let inner = bluefox_new_data();
        bluefox_data_insert(inner, b.as_ptr(), bluefox_new_bool(true));

        let array = bluefox_new_array();
        bluefox_array_push(array, bluefox_new_int(1));
        bluefox_array_push(array, bluefox_new_data_value(inner));

        let root = bluefox_new_data();
        bluefox_data_insert(root, a.as_ptr(), bluefox_new_array_value(array));
        let root = bluefox_new_data_value(root);

        let mut found: *mut BluefoxValue = std::ptr::null_mut();
        let path = c("a[1].b");
        assert_eq!(
            bluefox_value_lookup(root, path.as_ptr(), &mut found),
            BluefoxStatus::Ok
        );
        let mut flag = false;
        assert_eq!(bluefox_value_get_bool(found, &mut flag), BluefoxStatus::Ok);
        assert!(flag);

        let dotted = c("a.0");
        assert_eq!(
            bluefox_value_lookup(root, dotted.as_ptr(), &mut found),
            BluefoxStatus::Ok
        );
        let mut n = 0i64;
        assert_eq!(bluefox_value_get_int(found, &mut n), BluefoxStatus::Ok);
        assert_eq!(n, 1);

        let missing = c("a[2]");
        assert_eq!(
            bluefox_value_lookup(root, missing.as_ptr(), &mut found),
            BluefoxStatus::OutOfRange
        );
        let blank = c("..");
        assert_eq!(
            bluefox_value_lookup(root, blank.as_ptr(), &mut found),
            BluefoxStatus::InvalidPath
        );
        bluefox_release_value(root);
    }
}

#[test]
fn update_through_lookup_handle() {
    init_tracing();
    let count = c("count");
    unsafe {
        let data = bluefox_new_data();
        bluefox_data_insert(data, count.as_ptr(), bluefox_new_int(0));
        let root = bluefox_new_data_value(data);

        for _ in 0..3 {
            let mut slot: *mut BluefoxValue = std::ptr::null_mut();
            assert_eq!(
                bluefox_value_lookup(root, count.as_ptr(), &mut slot),
                BluefoxStatus::Ok
            );
            let mut n = 0i64;
            bluefox_value_get_int(slot, &mut n);
            let mut inner: *mut BluefoxData = std::ptr::null_mut();
            bluefox_value_get_data(root, &mut inner);
            bluefox_data_insert(inner, count.as_ptr(), bluefox_new_int(n + 1));
        }

        let mut slot: *mut BluefoxValue = std::ptr::null_mut();
        bluefox_value_lookup(root, count.as_ptr(), &mut slot);
        let mut n = 0i64;
        bluefox_value_get_int(slot, &mut n);
        assert_eq!(n, 3);
        bluefox_release_value(root);
    }
}

#[test]
fn pushing_a_value_into_its_own_array_is_refused() {
    init_tracing();
    unsafe {
        let v = bluefox_new_array_value(bluefox_new_array());
        let mut inner: *mut BluefoxArray = std::ptr::null_mut();
        assert_eq!(bluefox_value_get_array(v, &mut inner), BluefoxStatus::Ok);

        assert_eq!(bluefox_array_push(inner, v), BluefoxStatus::InvalidOwnership);

        // The value is still whole and still the caller's.
        assert_eq!(bluefox_value_kind(v), 6);
        assert_eq!(bluefox_array_len(inner), 0);
        assert_eq!(bluefox_array_push(inner, bluefox_new_int(1)), BluefoxStatus::Ok);
        let mut element: *mut BluefoxValue = std::ptr::null_mut();
        assert_eq!(bluefox_array_get(inner, 0, &mut element), BluefoxStatus::Ok);
        let mut n = 0i64;
        assert_eq!(bluefox_value_get_int(element, &mut n), BluefoxStatus::Ok);
        assert_eq!(n, 1);
        bluefox_release_value(v);
    }
}

#[test]
fn inserting_a_value_into_a_map_it_contains_is_refused() {
    init_tracing();
    let (config, limits, key) = (c("config"), c("config.limits"), c("max"));
    unsafe {
        let limits_map = bluefox_new_data();
        let config_map = bluefox_new_data();
        let limits_key = c("limits");
        bluefox_data_insert(config_map, limits_key.as_ptr(), bluefox_new_data_value(limits_map));
        let root_map = bluefox_new_data();
        bluefox_data_insert(root_map, config.as_ptr(), bluefox_new_data_value(config_map));
        let root = bluefox_new_data_value(root_map);

        let mut slot: *mut BluefoxValue = std::ptr::null_mut();
        assert_eq!(
            bluefox_value_lookup(root, limits.as_ptr(), &mut slot),
            BluefoxStatus::Ok
        );
        let mut nested: *mut BluefoxData = std::ptr::null_mut();
        assert_eq!(bluefox_value_get_data(slot, &mut nested), BluefoxStatus::Ok);

        assert_eq!(
            bluefox_data_insert(nested, key.as_ptr(), root),
            BluefoxStatus::InvalidOwnership
        );
        assert_eq!(bluefox_data_len(nested), 0);

        // An unrelated value still goes in, and the root releases once.
        assert_eq!(
            bluefox_data_insert(nested, key.as_ptr(), bluefox_new_int(10)),
            BluefoxStatus::Ok
        );
        assert_eq!(bluefox_data_len(nested), 1);
        bluefox_release_value(root);
    }
}
