//! FFI bindings for the display core
//!
//! This module provides C-compatible function bindings for the display core.
//! Structured values cross the boundary as JSON strings; every returned
//! `SecureResult` must be released with `wallet_core_free_result`, every bare
//! string with `wallet_core_free_string`.
//!
//! Error codes:
//! - 1: invalid input pointer, encoding, length or characters
//! - 2: unsupported network
//! - 3: malformed JSON payload
//! - 4: wallet failed validation
//! - 15: result string conversion failed

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::core::lists::{is_token_in_list, writable_lists};
use crate::core::profile::AccountProfileResolver;
use crate::domain::entities::{NameRegistry, UserLists, Wallet};
use crate::shared::config::CoreConfig;
use crate::shared::constants::{FFI_MAX_IDENTIFIER_LENGTH, FFI_MAX_PAYLOAD_LENGTH};
use crate::shared::error::WalletError;
use crate::shared::types::Network;

const ERR_INVALID_INPUT: i32 = 1;
const ERR_INVALID_NETWORK: i32 = 2;
const ERR_INVALID_PAYLOAD: i32 = 3;
const ERR_INVALID_WALLET: i32 = 4;
const ERR_STRING_CONVERSION: i32 = 15;

/// FFI result wrapper
#[repr(C)]
pub struct SecureResult {
    pub success: bool,
    pub data: *mut c_char,
    pub error_code: i32,
}

impl SecureResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(c_string) => Self {
                success: true,
                data: c_string.into_raw(),
                error_code: 0,
            },
            Err(_) => Self::error(ERR_STRING_CONVERSION),
        }
    }

    fn error(error_code: i32) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error_code,
        }
    }

    fn json<T: serde::Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(json) => Self::success(json),
            Err(_) => Self::error(ERR_STRING_CONVERSION),
        }
    }
}

/// Read a C string, rejecting null, non UTF-8 and oversized input
fn read_input(input: *const c_char, max_length: usize) -> Result<String, WalletError> {
    if input.is_null() {
        return Err(WalletError::validation("Null input pointer"));
    }

    // SAFETY: non-null, and the caller guarantees a NUL-terminated string
    let input_str = unsafe { CStr::from_ptr(input) }
        .to_str()
        .map_err(|_| WalletError::validation("Invalid UTF-8 input"))?;

    if input_str.len() > max_length {
        return Err(WalletError::validation("Input too long"));
    }

    Ok(input_str.to_string())
}

/// Read an identifier (list id, address): non-empty, alphanumeric, `_` or `-`
fn read_identifier(input: *const c_char) -> Result<String, WalletError> {
    let value = read_input(input, FFI_MAX_IDENTIFIER_LENGTH)?;

    if value.is_empty() {
        return Err(WalletError::validation("Empty input"));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(WalletError::validation("Input contains invalid characters"));
    }

    Ok(value)
}

/// Read an optional JSON payload; null means "absent"
fn read_json<T: serde::de::DeserializeOwned>(
    input: *const c_char,
) -> Result<Option<T>, WalletError> {
    if input.is_null() {
        return Ok(None);
    }
    let json = read_input(input, FFI_MAX_PAYLOAD_LENGTH)?;
    Ok(Some(serde_json::from_str(&json)?))
}

fn read_network(chain_id: i32) -> Result<Network, WalletError> {
    let chain_id =
        u64::try_from(chain_id).map_err(|_| WalletError::validation("Negative chain id"))?;
    Network::from_chain_id(chain_id)
}

fn error_code(error: &WalletError) -> i32 {
    match error {
        WalletError::Serialization(_) => ERR_INVALID_PAYLOAD,
        _ => ERR_INVALID_INPUT,
    }
}

/// Resolve the display profile of an account
///
/// `wallet_json` and `names_json` may be null; `address` may be null or
/// empty. Those cases yield the empty profile `{}`, not an error.
#[no_mangle]
pub extern "C" fn wallet_core_resolve_account_profile(
    wallet_json: *const c_char,
    names_json: *const c_char,
    chain_id: i32,
    address: *const c_char,
) -> SecureResult {
    let network = match read_network(chain_id) {
        Ok(n) => n,
        Err(_) => return SecureResult::error(ERR_INVALID_NETWORK),
    };

    let wallet: Option<Wallet> = match read_json(wallet_json) {
        Ok(w) => w,
        Err(e) => return SecureResult::error(error_code(&e)),
    };
    if let Some(wallet) = &wallet {
        if wallet.validate().is_err() {
            return SecureResult::error(ERR_INVALID_WALLET);
        }
    }

    let names: NameRegistry = match read_json(names_json) {
        Ok(names) => names.unwrap_or_default(),
        Err(e) => return SecureResult::error(error_code(&e)),
    };

    let address = if address.is_null() {
        None
    } else {
        match read_input(address, FFI_MAX_IDENTIFIER_LENGTH) {
            Ok(a) => Some(a),
            Err(_) => return SecureResult::error(ERR_INVALID_INPUT),
        }
    };

    let resolver = match CoreConfig::from_env() {
        Ok(config) => AccountProfileResolver::from_config(&config),
        Err(e) => {
            log::warn!("Ignoring invalid configuration: {}", e);
            AccountProfileResolver::default()
        }
    };

    let profile = resolver.resolve(wallet.as_ref(), &names, network, address.as_deref());
    SecureResult::json(&profile)
}

/// Check whether a token is in one of the user's lists; data is `true`/`false`
#[no_mangle]
pub extern "C" fn wallet_core_is_token_in_list(
    list_id: *const c_char,
    token_address: *const c_char,
    lists_json: *const c_char,
) -> SecureResult {
    let list_id = match read_identifier(list_id) {
        Ok(id) => id,
        Err(_) => return SecureResult::error(ERR_INVALID_INPUT),
    };
    let token_address = match read_identifier(token_address) {
        Ok(a) => a,
        Err(_) => return SecureResult::error(ERR_INVALID_INPUT),
    };
    let lists: UserLists = match read_json(lists_json) {
        Ok(lists) => lists.unwrap_or_default(),
        Err(e) => return SecureResult::error(error_code(&e)),
    };

    let member = is_token_in_list(&list_id, &token_address, &lists.favorites, &lists.lists);
    SecureResult::json(&member)
}

/// Writable default lists of a network as a JSON array
#[no_mangle]
pub extern "C" fn wallet_core_writable_lists(chain_id: i32) -> SecureResult {
    match read_network(chain_id) {
        Ok(network) => SecureResult::json(&writable_lists(network)),
        Err(_) => SecureResult::error(ERR_INVALID_NETWORK),
    }
}

/// Free a C string returned by this library
#[no_mangle]
pub extern "C" fn wallet_core_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        // SAFETY: ptr was produced by CString::into_raw in this module
        unsafe {
            drop(CString::from_raw(ptr));
        }
    }
}

/// Free the data held by a SecureResult
#[no_mangle]
pub extern "C" fn wallet_core_free_result(result: *mut SecureResult) {
    if !result.is_null() {
        // SAFETY: result points to a SecureResult returned by this module
        unsafe {
            let result_ref = &mut *result;
            if !result_ref.data.is_null() {
                drop(CString::from_raw(result_ref.data));
                result_ref.data = ptr::null_mut();
            }
        }
    }
}
