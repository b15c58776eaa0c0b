//! Validated research input.

use crate::domain::foundation::ValidationError;

/// Minimum number of characters (after trimming) accepted for analysis.
pub const MIN_RESEARCH_TEXT_CHARS: usize = 50;

/// Raw research text that has passed length validation.
///
/// The original text is kept as submitted; only the length check looks at
/// the trimmed form. Length is measured in Unicode scalar values so that
/// non-Latin transcripts are not penalised for multi-byte encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchText(String);

impl ResearchText {
    /// Validates and wraps research text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TextTooShort` when the trimmed text has fewer
    /// than [`MIN_RESEARCH_TEXT_CHARS`] characters.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let len = raw.trim().chars().count();
        if len < MIN_RESEARCH_TEXT_CHARS {
            return Err(ValidationError::text_too_short(MIN_RESEARCH_TEXT_CHARS, len));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character count of the trimmed text.
    pub fn char_count(&self) -> usize {
        self.0.trim().chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_49_characters() {
        let text = "a".repeat(49);
        let err = ResearchText::parse(text).unwrap_err();
        assert_eq!(err, ValidationError::text_too_short(50, 49));
    }

    #[test]
    fn accepts_exactly_50_characters() {
        let text = "x".repeat(50);
        let parsed = ResearchText::parse(text.clone()).unwrap();
        assert_eq!(parsed.as_str(), text);
        assert_eq!(parsed.char_count(), 50);
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let text = format!("   \n{}\t  ", "y".repeat(49));
        assert!(ResearchText::parse(text).is_err());
    }

    #[test]
    fn keeps_original_text_untrimmed() {
        let text = format!("  {}  ", "z".repeat(60));
        let parsed = ResearchText::parse(text.clone()).unwrap();
        assert_eq!(parsed.into_inner(), text);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 49 two-byte characters: 98 bytes, still too short.
        let text = "é".repeat(49);
        assert!(ResearchText::parse(text).is_err());
    }

    proptest! {
        #[test]
        fn any_trimmed_text_under_minimum_is_rejected(
            body in "[a-zA-Z0-9 .,!?]{0,49}",
            pad in "[ \t\n]{0,10}",
        ) {
            let text = format!("{pad}{body}{pad}");
            prop_assume!(text.trim().chars().count() < MIN_RESEARCH_TEXT_CHARS);
            let is_too_short = matches!(
                ResearchText::parse(text),
                Err(ValidationError::TextTooShort { .. })
            );
            prop_assert!(is_too_short);
        }

        #[test]
        fn any_text_at_or_over_minimum_is_accepted(body in "[a-z]{50,200}") {
            prop_assert!(ResearchText::parse(body).is_ok());
        }
    }
}
