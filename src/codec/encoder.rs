//! Punycode label encoding.
//!
//! Two layers: [`punycode_encode`] is the bare RFC 3492 transform producing
//! the encoded body without any prefix, and [`encode_label`] is the
//! caller-facing entry point that adds the ACE prefix and enforces the DNS
//! label length bound.

use crate::codec::bootstring::{
    adapt, encode_digit, threshold, BASE, INITIAL_BIAS, INITIAL_N,
};
use crate::error::IdnaError;
use crate::types::{ACE_PREFIX, LABEL_DELIMITER, MAX_LABEL_LENGTH};

/// One label's code points, split into the views the encoder scans.
///
/// `all` preserves the original order for the threshold scan; `basic` holds
/// the literal ASCII section of the output; `non_basic` holds the code
/// points that need encoding.
struct CodePoints {
    all: Vec<u32>,
    basic: String,
    non_basic: Vec<u32>,
}

fn list_code_points(label: &str) -> CodePoints {
    let mut points = CodePoints {
        all: Vec::new(),
        basic: String::new(),
        non_basic: Vec::new(),
    };

    for c in label.chars() {
        let code = c as u32;
        points.all.push(code);
        if code < INITIAL_N {
            points.basic.push(c);
        } else {
            points.non_basic.push(code);
        }
    }

    points
}

/// Encode one label into its bare punycode form, without the ACE prefix.
///
/// Basic code points (< 128) are emitted literally, followed by a `-`
/// delimiter when any were present, followed by the encoded deltas of the
/// non-basic code points. A label containing only basic code points is
/// returned unchanged.
///
/// # Errors
///
/// Returns [`IdnaError::Overflow`] if delta accumulation overflows, which
/// cannot happen for any label short enough to be a DNS label.
///
/// # Examples
///
/// ```
/// use punycodec::punycode_encode;
///
/// assert_eq!(punycode_encode("bücher").unwrap(), "bcher-kva");
/// assert_eq!(punycode_encode("α").unwrap(), "mxa");
/// assert_eq!(punycode_encode("plain").unwrap(), "plain");
/// ```
pub fn punycode_encode(label: &str) -> Result<String, IdnaError> {
    let mut points = list_code_points(label);

    let b = points.basic.len() as u32;
    let mut output = points.basic;
    if points.non_basic.is_empty() {
        return Ok(output);
    }
    if b > 0 {
        output.push(LABEL_DELIMITER);
    }

    points.non_basic.sort_unstable();
    points.non_basic.dedup();

    let mut n = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut delta: u32 = 0;
    let mut h = b;

    for &m in &points.non_basic {
        delta = (m - n)
            .checked_mul(h + 1)
            .and_then(|d| delta.checked_add(d))
            .ok_or(IdnaError::Overflow)?;
        n = m;

        for &c in &points.all {
            if c < n {
                delta = delta.checked_add(1).ok_or(IdnaError::Overflow)?;
            }
            if c == n {
                // Emit delta as a generalized variable-length integer.
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));

                bias = adapt(delta, h + 1, h == b);
                delta = 0;
                h += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(IdnaError::Overflow)?;
        n += 1;
    }

    Ok(output)
}

/// Encode one label into its ACE form, ready to sit in an ASCII domain.
///
/// All-ASCII labels pass through unchanged. Anything else is punycode
/// encoded, prefixed with `xn--`, and lowercased.
///
/// # Errors
///
/// Returns [`IdnaError::LabelTooLong`] when the prefixed label exceeds
/// 63 bytes, and propagates [`IdnaError::Overflow`] from the inner encoder.
///
/// # Examples
///
/// ```
/// use punycodec::encode_label;
///
/// assert_eq!(encode_label("münchen").unwrap(), "xn--mnchen-3ya");
/// assert_eq!(encode_label("example").unwrap(), "example");
/// ```
pub fn encode_label(label: &str) -> Result<String, IdnaError> {
    if label.is_ascii() {
        return Ok(label.to_owned());
    }

    let mut output = String::from(ACE_PREFIX);
    output.push_str(&punycode_encode(label)?);
    if output.len() > MAX_LABEL_LENGTH {
        return Err(IdnaError::LabelTooLong);
    }
    output.make_ascii_lowercase();

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_non_basic() {
        assert_eq!(punycode_encode("ü").unwrap(), "tda");
        assert_eq!(punycode_encode("α").unwrap(), "mxa");
        assert_eq!(punycode_encode("例").unwrap(), "fsq");
    }

    #[test]
    fn test_encode_mixed() {
        assert_eq!(punycode_encode("bücher").unwrap(), "bcher-kva");
        assert_eq!(punycode_encode("münchen").unwrap(), "mnchen-3ya");
    }

    #[test]
    fn test_encode_no_basic_no_delimiter() {
        // no literal section means no delimiter either
        assert_eq!(punycode_encode("правда").unwrap(), "80aafi6cg");
    }

    #[test]
    fn test_encode_identity_for_ascii() {
        assert_eq!(punycode_encode("").unwrap(), "");
        assert_eq!(punycode_encode("plain").unwrap(), "plain");
        assert_eq!(punycode_encode("has-hyphen").unwrap(), "has-hyphen");
    }

    #[test]
    fn test_encode_preserves_case_in_literal_section() {
        // the bare layer copies basic code points verbatim
        assert_eq!(punycode_encode("München").unwrap(), "Mnchen-3ya");
    }

    #[test]
    fn test_encode_label_adds_prefix_and_lowercases() {
        assert_eq!(encode_label("münchen").unwrap(), "xn--mnchen-3ya");
        assert_eq!(encode_label("München").unwrap(), "xn--mnchen-3ya");
    }

    #[test]
    fn test_encode_label_ascii_passthrough() {
        assert_eq!(encode_label("example").unwrap(), "example");
        assert_eq!(encode_label("UPPER").unwrap(), "UPPER");
    }

    #[test]
    fn test_encode_label_length_bound() {
        // 55 ASCII chars + one non-basic encodes to exactly 63 bytes
        let just_fits = format!("{}ü", "a".repeat(55));
        let encoded = encode_label(&just_fits).unwrap();
        assert_eq!(encoded.len(), 63);

        let too_long = format!("{}ü", "a".repeat(56));
        assert_eq!(encode_label(&too_long), Err(IdnaError::LabelTooLong));
    }
}
