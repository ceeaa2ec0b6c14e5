//! Domain-level conversion between Unicode and ACE form.
//!
//! The codec itself knows nothing about dots or domains; this module splits
//! a domain into labels, runs each through the codec, and enforces the
//! whole-domain length ceiling. Any single label failure fails the whole
//! conversion; no partial result is returned.

use crate::codec::{decode_label, encode_label};
use crate::error::IdnaError;
use crate::types::{IdnaOptions, IdnaVariant, MAX_DOMAIN_LENGTH};

/// Convert a domain name to its IDNA ASCII form.
///
/// The input is lowercased first only under the UTS-46 variant. Each
/// dot-separated label is encoded with [`encode_label`]; an empty label or
/// an over-long encoded label rejects the whole domain, as does a joined
/// result over 255 bytes.
///
/// Option flags are accepted for interface compatibility and do not alter
/// behavior.
///
/// # Examples
///
/// ```
/// use punycodec::{domain_to_ascii, IdnaOptions, IdnaVariant};
///
/// let ascii = domain_to_ascii(
///     "bücher.example",
///     IdnaOptions::default(),
///     IdnaVariant::Uts46,
/// )?;
/// assert_eq!(ascii, "xn--bcher-kva.example");
/// # Ok::<(), punycodec::IdnaError>(())
/// ```
pub fn domain_to_ascii(
    domain: &str,
    _options: IdnaOptions,
    variant: IdnaVariant,
) -> Result<String, IdnaError> {
    let input = match variant {
        IdnaVariant::Uts46 => domain.to_lowercase(),
        IdnaVariant::Idna2003 => domain.to_owned(),
    };

    let mut labels = Vec::new();
    for label in input.split('.') {
        if label.is_empty() {
            return Err(IdnaError::EmptyLabel);
        }
        labels.push(encode_label(label)?);
    }

    let output = labels.join(".");
    if output.len() > MAX_DOMAIN_LENGTH {
        return Err(IdnaError::DomainTooLong);
    }

    Ok(output)
}

/// Convert an IDNA ASCII domain back to its Unicode form.
///
/// Labels of 1 to 63 bytes carrying the `xn--` prefix are decoded; all
/// other labels pass through unchanged. A joined result over 255 bytes
/// rejects the whole domain.
///
/// Option flags and the variant are accepted for interface compatibility
/// and do not alter behavior in this direction.
///
/// # Examples
///
/// ```
/// use punycodec::{domain_to_unicode, IdnaOptions, IdnaVariant};
///
/// let unicode = domain_to_unicode(
///     "xn--bcher-kva.example",
///     IdnaOptions::default(),
///     IdnaVariant::Uts46,
/// )?;
/// assert_eq!(unicode, "bücher.example");
/// # Ok::<(), punycodec::IdnaError>(())
/// ```
pub fn domain_to_unicode(
    domain: &str,
    _options: IdnaOptions,
    _variant: IdnaVariant,
) -> Result<String, IdnaError> {
    let mut labels = Vec::new();
    for label in domain.split('.') {
        labels.push(decode_label(label)?);
    }

    let output = labels.join(".");
    if output.len() > MAX_DOMAIN_LENGTH {
        return Err(IdnaError::DomainTooLong);
    }

    Ok(output)
}

/// Convert a domain to ASCII form with default options and variant (UTS-46).
///
/// # Examples
///
/// ```
/// use punycodec::to_ascii;
///
/// assert_eq!(to_ascii("münchen.de")?, "xn--mnchen-3ya.de");
/// assert_eq!(to_ascii("example.com")?, "example.com");
/// # Ok::<(), punycodec::IdnaError>(())
/// ```
pub fn to_ascii(domain: &str) -> Result<String, IdnaError> {
    domain_to_ascii(domain, IdnaOptions::default(), IdnaVariant::default())
}

/// Convert a domain to Unicode form with default options and variant.
///
/// # Examples
///
/// ```
/// use punycodec::to_unicode;
///
/// assert_eq!(to_unicode("xn--mnchen-3ya.de")?, "münchen.de");
/// # Ok::<(), punycodec::IdnaError>(())
/// ```
pub fn to_unicode(domain: &str) -> Result<String, IdnaError> {
    domain_to_unicode(domain, IdnaOptions::default(), IdnaVariant::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_domain_passes_through() {
        assert_eq!(to_ascii("example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_uts46_lowercases_input() {
        assert_eq!(to_ascii("EXAMPLE.COM").unwrap(), "example.com");
        assert_eq!(to_ascii("MÜNCHEN.DE").unwrap(), "xn--mnchen-3ya.de");
    }

    #[test]
    fn test_idna2003_keeps_case() {
        let ascii = domain_to_ascii(
            "EXAMPLE.COM",
            IdnaOptions::default(),
            IdnaVariant::Idna2003,
        )
        .unwrap();
        assert_eq!(ascii, "EXAMPLE.COM");

        // the generated ACE label is still lowercased
        let mixed = domain_to_ascii(
            "München.de",
            IdnaOptions::default(),
            IdnaVariant::Idna2003,
        )
        .unwrap();
        assert_eq!(mixed, "xn--mnchen-3ya.de");
    }

    #[test]
    fn test_empty_label_rejected() {
        assert_eq!(to_ascii("a..b"), Err(IdnaError::EmptyLabel));
        assert_eq!(to_ascii(""), Err(IdnaError::EmptyLabel));
        assert_eq!(to_ascii("trailing.dot."), Err(IdnaError::EmptyLabel));
    }

    #[test]
    fn test_to_unicode_mixed_labels() {
        assert_eq!(
            to_unicode("www.xn--mnchen-3ya.de").unwrap(),
            "www.münchen.de"
        );
    }

    #[test]
    fn test_to_unicode_leaves_unprefixed_labels() {
        assert_eq!(to_unicode("example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_label_failure_fails_whole_domain() {
        assert_eq!(
            to_unicode("ok.xn--td!.com"),
            Err(IdnaError::InvalidDigit('!'))
        );
    }
}
