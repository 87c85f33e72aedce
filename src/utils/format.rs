/// Maximum number of characters of a social URL shown on a card.
const URL_DISPLAY_CHARS: usize = 15;

/// Truncates a URL for display on a social card.
/// Strings of 15 characters or fewer render verbatim; longer ones show
/// the first 15 characters followed by "...". Counts chars, not bytes.
pub fn truncate_url(url: &str) -> String {
    if url.chars().count() <= URL_DISPLAY_CHARS {
        return url.to_string();
    }
    let head: String = url.chars().take(URL_DISPLAY_CHARS).collect();
    format!("{}...", head)
}
