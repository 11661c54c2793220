//! Query handling: parse the typed number and render it in the other bases.

use tracing::debug;

use super::item::ResultItem;
use crate::config::Preferences;
use crate::encoding::{Encoding, DEFAULT_ICON};
use crate::error::{RadixError, RadixResult};

/// A number successfully parsed from the query argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber {
    value: i128,
}

impl ParsedNumber {
    /// Parse `payload` as a literal of `encoding`.
    pub fn parse(payload: &str, encoding: Encoding) -> RadixResult<Self> {
        if payload.is_empty() {
            return Err(RadixError::EmptyInput);
        }
        encoding.decode(payload).map(|value| Self { value })
    }

    pub fn value(&self) -> i128 {
        self.value
    }

    /// Result row showing this number in `encoding`.
    pub fn result_item(&self, encoding: Encoding) -> ResultItem {
        let payload = encoding.encode(self.value);
        let description = format!("{}; Copy to clipboard.", capitalize(encoding.display_name()));
        ResultItem::copyable(encoding.icon(), payload, description)
    }
}

/// Row shown instead of conversions when the argument cannot be parsed.
pub fn error_item(error: &RadixError, source: Encoding) -> ResultItem {
    match error {
        RadixError::EmptyInput => ResultItem::message(
            DEFAULT_ICON,
            "No input",
            format!("Please input a {} number", source),
        ),
        other => ResultItem::message(DEFAULT_ICON, "Failed to convert number", other.to_string())
            .with_alt_nothing(),
    }
}

/// Convert `raw` from `source` into each of `targets`, in order.
///
/// Never fails: an empty or malformed argument yields a single explanatory
/// item instead.
pub fn convert(raw: &str, source: Encoding, targets: &[Encoding]) -> Vec<ResultItem> {
    match ParsedNumber::parse(raw, source) {
        Ok(number) => targets.iter().map(|&t| number.result_item(t)).collect(),
        Err(e) => vec![error_item(&e, source)],
    }
}

/// First whitespace-delimited token of the query argument.
///
/// Leading whitespace yields an empty token.
pub fn first_token(argument: &str) -> &str {
    argument.split(char::is_whitespace).next().unwrap_or_default()
}

/// Entry point called by the host for every keyword query.
///
/// The keyword selects the source encoding through `preferences`; a keyword
/// that matches none of them is the only error returned.
pub fn handle_query(
    keyword: &str,
    preferences: &Preferences,
    argument: Option<&str>,
) -> RadixResult<Vec<ResultItem>> {
    let source = preferences
        .source_for(keyword)
        .ok_or_else(|| RadixError::UnrecognizedKeyword(keyword.to_string()))?;
    let token = first_token(argument.unwrap_or_default());

    debug!(keyword, %source, token, "Handling query");

    Ok(convert(token, source, &source.targets()))
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
