//! C FFI layer for hosts that load the converter as a native plugin.
//!
//! Strings cross the boundary as UTF-8 C strings and structured data as
//! JSON. Every string returned here must be released with
//! `nova_radix_string_free()`.

use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use serde::Serialize;

use crate::config::Preferences;
use crate::core::{handle_query, ResultItem};
use crate::error::{RadixError, RadixResult};
use crate::manifest::PluginManifest;

/// JSON response for a query.
#[derive(Serialize)]
#[serde(untagged)]
enum QueryResponse {
    Items { items: Vec<ResultItem> },
    Error { error: String },
}

// ============================================================================
// FFI Functions
// ============================================================================

/// Handle a keyword query and return the result list as JSON.
///
/// # Arguments
/// * `keyword` - The keyword that triggered the query (required)
/// * `argument` - The text typed after the keyword, or null
/// * `preferences_json` - JSON object mapping `kw_hex`, `kw_bin`, `kw_dec`
///   to keywords, or null for the defaults
///
/// # Returns
/// `{"items": [...]}` on success or `{"error": "..."}` when the keyword is
/// not recognized or the preferences are malformed. Null if `keyword` is
/// null or any string is not valid UTF-8.
///
/// # Safety
/// Every non-null pointer must be a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn nova_radix_handle_query(
    keyword: *const c_char,
    argument: *const c_char,
    preferences_json: *const c_char,
) -> *mut c_char {
    if keyword.is_null() {
        return ptr::null_mut();
    }

    let (Some(keyword), Ok(argument), Ok(preferences_json)) = (
        c_str(keyword).ok(),
        optional_c_str(argument),
        optional_c_str(preferences_json),
    ) else {
        return ptr::null_mut();
    };

    let response = match query_items(keyword, argument, preferences_json) {
        Ok(items) => QueryResponse::Items { items },
        Err(e) => {
            tracing::warn!(keyword, "Query failed: {}", e);
            QueryResponse::Error {
                error: e.to_string(),
            }
        }
    };

    match serde_json::to_string(&response) {
        Ok(json) => into_c_string(json),
        Err(_) => ptr::null_mut(),
    }
}

/// Return the plugin manifest as TOML.
///
/// The caller must free the string using `nova_radix_string_free()`.
#[no_mangle]
pub extern "C" fn nova_radix_manifest() -> *mut c_char {
    match PluginManifest::default().to_toml() {
        Ok(toml) => into_c_string(toml),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string allocated by the FFI functions.
///
/// # Safety
/// The pointer must be a valid string returned by one of the FFI functions,
/// or null (which is safely ignored).
#[no_mangle]
pub unsafe extern "C" fn nova_radix_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Internal Helper Functions
// ============================================================================

fn query_items(
    keyword: &str,
    argument: Option<&str>,
    preferences_json: Option<&str>,
) -> RadixResult<Vec<ResultItem>> {
    let preferences = match preferences_json {
        Some(json) => {
            let map: HashMap<String, String> = serde_json::from_str(json)?;
            Preferences::from_map(&map)
        }
        None => Preferences::default(),
    };
    handle_query(keyword, &preferences, argument)
}

unsafe fn c_str<'a>(ptr: *const c_char) -> RadixResult<&'a str> {
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| RadixError::Config(e.to_string()))
}

unsafe fn optional_c_str<'a>(ptr: *const c_char) -> RadixResult<Option<&'a str>> {
    if ptr.is_null() {
        Ok(None)
    } else {
        c_str(ptr).map(Some)
    }
}

fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}
