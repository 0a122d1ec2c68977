/// Terminal columns taken by `text`. Emoji icons and medals take two.
pub fn display_width(text: &str) -> usize {
    ratatui::text::Span::raw(text).width()
}

pub fn padding(used: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_counts_wide_glyphs() {
        assert_eq!(display_width("Users"), 5);
        assert_eq!(display_width("👤 Users"), 8);
        assert_eq!(display_width("🥇 1st"), 6);
    }

    #[test]
    fn test_padding() {
        assert_eq!(padding(3, 5), "  ");
        assert_eq!(padding(7, 5), "");
    }
}
