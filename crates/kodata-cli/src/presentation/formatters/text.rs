/// First `max_chars` characters plus `...` when the text is longer, otherwise unchanged.
///
/// Counts characters, not bytes, so Hangul is never split mid-codepoint.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Fit `text` into `width` columns for table layouts, ellipsis included
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else if width <= 3 {
        text.chars().take(width).collect()
    } else {
        truncate_with_ellipsis(text, width - 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_text_is_cut_with_ellipsis() {
        let text = "a".repeat(200);
        let out = truncate_with_ellipsis(&text, 150);

        assert_eq!(out.chars().count(), 153);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..150], &text[..150]);
    }

    #[test]
    fn test_short_text_passes_through() {
        let text = "b".repeat(100);
        assert_eq!(truncate_with_ellipsis(&text, 150), text);
    }

    #[test]
    fn test_exact_length_has_no_ellipsis() {
        let text = "c".repeat(150);
        assert_eq!(truncate_with_ellipsis(&text, 150), text);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(truncate_with_ellipsis("한국어 데이터셋", 3), "한국어...");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("beomi/KoAlpaca", 20), "beomi/KoAlpaca");
        assert_eq!(fit("beomi/KoAlpaca", 8), "beomi...");
        assert_eq!(fit("beomi", 2), "be");
    }
}
