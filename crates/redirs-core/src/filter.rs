//! Search-term filtering over the redirect list.
//!
//! The term is expected to be lower-cased already; entry fields are compared
//! as-is, so an upper-case slug never matches.

use serde_json::Value;

use crate::entry::RedirectEntry;
use crate::error::SearchError;

/// Target text the term is matched against: the first `-` becomes a space.
pub fn target_haystack(target: &str) -> String {
    target.replacen('-', " ", 1)
}

/// `name.includes(term)`: substring for strings, element equality for arrays.
/// `None` when the value has no such search.
fn name_includes(name: &Value, term: &str) -> Option<bool> {
    match name {
        Value::String(s) => Some(s.contains(term)),
        Value::Array(items) => Some(items.iter().any(|item| item.as_str() == Some(term))),
        _ => None,
    }
}

/// Whether `entry` matches `term`.
///
/// Errors when a field the comparison reads is not searchable text. The
/// `target` field is only read when `name` did not match.
pub fn matches(entry: &RedirectEntry, index: usize, term: &str) -> Result<bool, SearchError> {
    let name_hit = entry
        .field("name", index)?
        .and_then(|name| name_includes(name, term))
        .ok_or(SearchError::MalformedEntry {
            index,
            field: "name",
        })?;
    if name_hit {
        return Ok(true);
    }
    match entry.field("target", index)? {
        Some(Value::String(target)) => Ok(target_haystack(target).contains(term)),
        _ => Err(SearchError::MalformedEntry {
            index,
            field: "target",
        }),
    }
}

/// Result set for a search. `None` passes every entry through in order.
pub fn filter_entries(
    entries: Vec<RedirectEntry>,
    term: Option<&str>,
) -> Result<Vec<RedirectEntry>, SearchError> {
    let Some(term) = term else {
        return Ok(entries);
    };
    let mut out = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        if matches(&entry, index, term)? {
            out.push(entry);
        }
    }
    Ok(out)
}
