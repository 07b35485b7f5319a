//! Short single-line labels for entries and the topbar.

/// Placeholder shown when there is nothing to preview.
pub const EMPTY_PREVIEW: &str = "...";

const ELLIPSIS: &str = "...";

/// Collapse whitespace runs to a single space and cap the result at `length`
/// characters: longer text keeps its first `length - 1` characters followed by
/// `"..."`.
pub fn truncate(text: &str, length: usize) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
            }
            in_run = true;
        } else {
            collapsed.push(ch);
            in_run = false;
        }
    }

    if collapsed.chars().count() <= length {
        return collapsed;
    }

    let kept: String = collapsed.chars().take(length.saturating_sub(1)).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Topbar label: the truncated text, or the placeholder when the text is
/// missing or empty.
pub fn topbar_label(text: Option<&str>, length: usize) -> String {
    match text {
        Some(text) if !text.is_empty() => truncate(text, length),
        _ => EMPTY_PREVIEW.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn long_text_keeps_length_minus_one_chars() {
        assert_eq!(truncate("abcdefghij", 5), "abcd...");
    }

    #[test]
    fn whitespace_runs_collapse_to_one_space() {
        assert_eq!(truncate("a \n\t b", 50), "a b");
        assert_eq!(truncate("  lead", 50), " lead");
        assert_eq!(truncate("tail\n\n", 50), "tail ");
        assert_eq!(truncate("\n\n", 50), " ");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate("ééééé", 3), "éé...");
    }

    #[test]
    fn topbar_label_uses_placeholder_for_missing_text() {
        assert_eq!(topbar_label(None, 15), "...");
        assert_eq!(topbar_label(Some(""), 15), "...");
        assert_eq!(topbar_label(Some("copied"), 15), "copied");
    }
}
