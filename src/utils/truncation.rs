const MAX_ERROR_LENGTH: usize = 2_000;

/// Keep at most `max_chars` characters of `text`. Cuts on char boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Like [`truncate_chars`] but appends a marker noting how much was dropped.
/// The marker is not counted against `max_chars`.
pub fn truncate_with_marker(text: &str, max_chars: usize) -> String {
    let kept = truncate_chars(text, max_chars);
    if kept.len() == text.len() {
        text.to_string()
    } else {
        let dropped = text[kept.len()..].chars().count();
        format!("{}\n... [truncated {} chars]", kept, dropped)
    }
}

/// Shorten upstream error bodies before they are shown to a user.
pub fn truncate_error(error: &str) -> String {
    let kept = truncate_chars(error, MAX_ERROR_LENGTH);
    if kept.len() == error.len() {
        error.to_string()
    } else {
        format!("{}...", kept)
    }
}
