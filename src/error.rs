//! Error types for IDNA encoding and decoding operations.

use thiserror::Error;

/// Errors that can occur while converting a domain or label between its
/// Unicode and ASCII-compatible (ACE) forms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdnaError {
    /// A dot-separated segment of the domain has zero length.
    #[error("domain contains an empty label")]
    EmptyLabel,

    /// An encoded label, including the ACE prefix, exceeds 63 bytes.
    #[error("encoded label exceeds the maximum length of 63 bytes")]
    LabelTooLong,

    /// The assembled domain exceeds the maximum length of 255 bytes.
    #[error("domain exceeds the maximum length of 255 bytes")]
    DomainTooLong,

    /// A decode-time character is not part of the punycode digit alphabet.
    #[error("character {0:?} is not a valid punycode digit")]
    InvalidDigit(char),

    /// Punycode input ended in the middle of an encoded value.
    #[error("punycode input ended inside an encoded value")]
    TruncatedInput,

    /// A decoded value is not a valid Unicode scalar value.
    #[error("decoded value {0:#x} is not a valid unicode code point")]
    InvalidCodePoint(u32),

    /// Numeric overflow while transcoding a label.
    #[error("arithmetic overflow while processing label")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            IdnaError::EmptyLabel.to_string(),
            "domain contains an empty label"
        );

        assert_eq!(
            IdnaError::DomainTooLong.to_string(),
            "domain exceeds the maximum length of 255 bytes"
        );

        assert_eq!(
            IdnaError::InvalidDigit('!').to_string(),
            "character '!' is not a valid punycode digit"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(IdnaError::EmptyLabel, IdnaError::EmptyLabel);
        assert_ne!(IdnaError::EmptyLabel, IdnaError::LabelTooLong);
        assert_eq!(IdnaError::InvalidDigit('ü'), IdnaError::InvalidDigit('ü'));
        assert_ne!(IdnaError::InvalidDigit('a'), IdnaError::InvalidDigit('b'));
    }
}
