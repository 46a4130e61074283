//! Search box placeholder. No search runs; submissions are echoed back and
//! typing only logs what a suggestion lookup would receive.

/// Confirmation text for a submitted query, `None` when it is blank
pub fn submission_message(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("Searching for: \"{query}\" ... (demo UX)"))
}

/// Lowercased input worth suggesting for. Length is measured in UTF-16
/// code units, as the input element reports it.
pub fn suggestion(raw: &str) -> Option<String> {
    let value = raw.to_lowercase();
    if value.encode_utf16().count() > 1 {
        log::info!("Suggesting results for: {value}");
        Some(value)
    } else {
        None
    }
}
