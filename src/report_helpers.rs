use unicode_width::UnicodeWidthStr;

/// Compute the max display width of `cells`, with a minimum of `min`.
pub fn max_display_width<'a>(cells: impl Iterator<Item = &'a str>, min: usize) -> usize {
    cells.map(UnicodeWidthStr::width).max().unwrap_or(min).max(min)
}

/// Left-align `cell` to `width` display columns.
pub fn pad_right(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
