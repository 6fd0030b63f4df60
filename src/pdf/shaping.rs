//! Arabic text shaping for PDF output.
//!
//! PDF content streams paint glyphs in storage order with no layout engine
//! behind them, so Arabic text has to be converted up front: isolated
//! letters are joined into their contextual presentation forms, then the
//! logical character sequence is reordered into visual order per the
//! Unicode bidirectional algorithm.

use ar_reshaper::ArabicReshaper;
use unicode_bidi::BidiInfo;

pub struct Shaper {
    reshaper: ArabicReshaper,
}

impl Shaper {
    pub fn new() -> Shaper {
        Shaper {
            reshaper: ArabicReshaper::default(),
        }
    }

    /// Convert one logical-order line into visual order with joined forms
    pub fn shape(&self, line: &str) -> String {
        let reshaped = self.reshaper.reshape(line);
        let bidi = BidiInfo::new(&reshaped, None);
        match bidi.paragraphs.first() {
            Some(paragraph) => bidi
                .reorder_line(paragraph, paragraph.range.clone())
                .into_owned(),
            None => reshaped,
        }
    }
}

impl Default for Shaper {
    fn default() -> Self {
        Shaper::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_presentation_form(c: char) -> bool {
        matches!(c as u32, 0xFB50..=0xFDFF | 0xFE70..=0xFEFF)
    }

    #[test]
    fn test_joined_letters_become_presentation_forms() {
        let shaper = Shaper::new();
        let shaped = shaper.shape("سلام");
        assert!(shaped.chars().any(is_presentation_form));
    }

    #[test]
    fn test_rtl_line_is_reordered_to_visual_order() {
        let shaper = Shaper::new();
        // Two non-joining letters: visual order is the reverse of logical
        let shaped = shaper.shape("دا");
        let logical_first = ArabicReshaper::default()
            .reshape("دا")
            .chars()
            .next()
            .unwrap();
        assert_eq!(shaped.chars().last(), Some(logical_first));
    }

    #[test]
    fn test_latin_text_passes_through() {
        let shaper = Shaper::new();
        assert_eq!(shaper.shape("plain text"), "plain text");
    }

    #[test]
    fn test_empty_line() {
        let shaper = Shaper::new();
        assert_eq!(shaper.shape(""), "");
    }
}
