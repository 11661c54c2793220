//! Core conversion logic - independent of any host or UI.
//!
//! - [`item`] - result items and their selection actions
//! - [`convert`] - parsing the query and rendering conversions

pub mod convert;
pub mod item;

pub use convert::{convert, error_item, first_token, handle_query, ParsedNumber};
pub use item::{ResultAction, ResultItem};
