//! Nova Radix - number base converter plugin for the Nova launcher.
//!
//! Type a keyword followed by a number and get the number back in the two
//! other bases, ready to copy:
//!
//! - `hex ff` shows `255` and `11111111`
//! - `dec 10` shows `a` and `1010`
//! - `bin 101` shows `5` and `5`
//!
//! # Architecture
//!
//! - [`encoding`] - the three supported encodings and their codecs
//! - [`core`] - query handling and result items
//! - [`config`] - keyword preferences
//! - [`manifest`] - the plugin manifest declared to the host
//! - [`executor`] - running a result's action without a host
//!
//! # FFI Layer
//!
//! Hosts load the plugin through the C ABI in [`ffi`], exchanging JSON.
//!
//! # Example
//!
//! ```
//! use nova_radix::{handle_query, Preferences};
//!
//! let items = handle_query("hex", &Preferences::default(), Some("ff")).unwrap();
//! assert_eq!(items[0].name, "255");
//! assert_eq!(items[1].name, "11111111");
//! ```

// Public modules
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod encoding;
pub mod executor;
pub mod manifest;

#[doc(hidden)]
pub mod ffi;

mod error;

// Re-export commonly used types for convenience
pub use config::Preferences;
pub use crate::core::{convert, handle_query, ParsedNumber, ResultAction, ResultItem};
pub use encoding::Encoding;
pub use error::{RadixError, RadixResult};
pub use manifest::PluginManifest;
