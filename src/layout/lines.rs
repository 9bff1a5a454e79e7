//! Fixed-width line formatting
//!
//! Lines are cut every `chars_per_line` characters regardless of word
//! boundaries. The buffer never contains hard line breaks, so the grid is a
//! pure function of the character count.

/// Split `text` into chunks of at most `chars_per_line` characters.
///
/// Produces `ceil(len / chars_per_line)` lines. Empty text yields no lines and
/// a zero line width yields no lines (the layout is skipped).
pub fn split_lines(text: &str, chars_per_line: usize) -> Vec<String> {
    if chars_per_line == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chars_per_line)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Number of lines `split_lines` would produce, without allocating
pub fn line_count(char_count: usize, chars_per_line: usize) -> usize {
    if chars_per_line == 0 {
        return 0;
    }
    char_count.div_ceil(chars_per_line)
}

/// Join lines for display
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// First line to display so that `caret_line` stays inside a window of
/// `max_lines` lines.
///
/// The window scrolls only once the caret moves past the bottom; text that
/// fits on screen is always shown from the top.
pub fn first_visible_line(caret_line: usize, max_lines: usize) -> usize {
    if max_lines == 0 {
        return caret_line;
    }
    (caret_line + 1).saturating_sub(max_lines)
}

/// The lines visible in the window starting at `first`
pub fn visible_lines(lines: &[String], first: usize, max_lines: usize) -> &[String] {
    let start = first.min(lines.len());
    let end = start.saturating_add(max_lines).min(lines.len());
    &lines[start..end]
}
