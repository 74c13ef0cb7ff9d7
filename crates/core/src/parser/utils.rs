/// Lines from the top of `source` through `cursor_line` (0-based, inclusive),
/// nearest line first.
///
/// A cursor past the end of the document clamps to its last line.
pub fn lines_to_cursor(source: &str, cursor_line: usize) -> Vec<&str> {
    let mut lines: Vec<&str> = source.lines().take(cursor_line.saturating_add(1)).collect();
    lines.reverse();
    lines
}

/// Number of whitespace characters before the first non-whitespace one
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
