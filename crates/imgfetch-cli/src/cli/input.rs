//! Prompt input parsing.

/// Splits one line of user input into candidate URLs.
///
/// The line is comma-separated; each piece is trimmed and empties are
/// dropped, so stray commas and surrounding whitespace are harmless.
pub fn split_url_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
