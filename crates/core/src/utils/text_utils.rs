/// Returns `None` for blank strings so they are omitted from registry payloads.
pub fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Same as [`non_empty`] for optional source fields.
pub fn non_empty_opt(value: Option<&str>) -> Option<String> {
    value.and_then(non_empty)
}
