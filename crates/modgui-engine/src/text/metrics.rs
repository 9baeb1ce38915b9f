/// Text measurement supplied by the host.
pub trait FontMetrics {
    /// Advance width of `text` on a single line, in GUI pixels.
    fn string_width(&self, text: &str) -> i32;

    /// Vertical distance between consecutive wrapped lines.
    fn line_height(&self) -> i32;

    /// Splits `text` into lines no wider than `max_width`.
    ///
    /// Words are packed greedily; a word wider than `max_width` on its own is
    /// split between characters. `'\n'` always starts a new line. A
    /// non-positive `max_width` only honours explicit line breaks.
    fn wrap_to_width(&self, text: &str, max_width: i32) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            if max_width <= 0 {
                lines.push(paragraph.to_string());
                continue;
            }

            let mut current = String::new();
            for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                if self.string_width(&candidate) <= max_width {
                    current = candidate;
                    continue;
                }

                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }

                // Hard split; every chunk keeps at least one character.
                for ch in word.chars() {
                    let mut next = current.clone();
                    next.push(ch);
                    if !current.is_empty() && self.string_width(&next) > max_width {
                        lines.push(std::mem::take(&mut current));
                        current.push(ch);
                    } else {
                        current = next;
                    }
                }
            }
            lines.push(current);
        }
        lines
    }
}

/// Monospaced metrics: every character advances by the same amount.
///
/// Used by headless hosts and tests where no font file is loaded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedWidthFont {
    pub advance: i32,
    pub line_height: i32,
}

impl FixedWidthFont {
    pub const fn new(advance: i32, line_height: i32) -> Self {
        Self { advance, line_height }
    }
}

impl Default for FixedWidthFont {
    fn default() -> Self {
        Self::new(6, 9)
    }
}

impl FontMetrics for FixedWidthFont {
    fn string_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> FixedWidthFont {
        FixedWidthFont::new(1, 9)
    }

    #[test]
    fn fixed_width_measures_chars() {
        assert_eq!(FixedWidthFont::default().string_width("abcd"), 24);
        assert_eq!(FixedWidthFont::default().string_width(""), 0);
    }

    #[test]
    fn wrap_packs_words_greedily() {
        let lines = font().wrap_to_width("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(font().wrap_to_width("hello", 40), vec!["hello"]);
    }

    #[test]
    fn wrap_splits_overlong_words() {
        let lines = font().wrap_to_width("abcdefgh ij", 3);
        assert_eq!(lines, vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn wrap_honours_explicit_newlines() {
        let lines = font().wrap_to_width("one\n\ntwo", 20);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn wrap_without_width_only_breaks_on_newlines() {
        let lines = font().wrap_to_width("a long line\nnext", 0);
        assert_eq!(lines, vec!["a long line", "next"]);
    }
}
