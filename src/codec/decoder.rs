//! Punycode label decoding.
//!
//! The mirror of the encoder: [`punycode_decode`] is the bare RFC 3492
//! transform over an input whose ACE prefix has already been removed, and
//! [`decode_label`] is the caller-facing per-label step that strips the
//! prefix and passes non-ACE labels through unchanged.

use crate::codec::bootstring::{
    adapt, decode_digit, threshold, BASE, INITIAL_BIAS, INITIAL_N,
};
use crate::error::IdnaError;
use crate::types::{ACE_PREFIX, LABEL_DELIMITER, MAX_LABEL_LENGTH};

/// Decode the punycode body of a label back into its Unicode form.
///
/// Everything before the last `-` delimiter (if any) is the literal ASCII
/// section and is copied verbatim; the remainder is decoded as a sequence of
/// generalized variable-length integers selecting code points and insertion
/// positions.
///
/// # Errors
///
/// * [`IdnaError::InvalidDigit`]: a character outside `a-z0-9` in the
///   encoded section.
/// * [`IdnaError::TruncatedInput`]: the input ends inside an encoded value.
/// * [`IdnaError::InvalidCodePoint`]: a decoded value is not a Unicode
///   scalar value.
/// * [`IdnaError::Overflow`]: the accumulated state exceeds `u32` range.
///
/// # Examples
///
/// ```
/// use punycodec::punycode_decode;
///
/// assert_eq!(punycode_decode("bcher-kva").unwrap(), "bücher");
/// assert_eq!(punycode_decode("tda").unwrap(), "ü");
/// ```
pub fn punycode_decode(input: &str) -> Result<String, IdnaError> {
    let (mut output, encoded): (Vec<char>, &str) = match input.rfind(LABEL_DELIMITER) {
        Some(pos) => (input[..pos].chars().collect(), &input[pos + 1..]),
        None => (Vec::new(), input),
    };

    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut out_len = output.len() as u32;

    let mut digits = encoded.chars();
    loop {
        let mut c = match digits.next() {
            Some(c) => c,
            None => break,
        };
        let oldi = i;
        let mut w: u32 = 1;
        let mut k = BASE;

        // Decode one generalized variable-length integer into i.
        loop {
            let digit = decode_digit(c).ok_or(IdnaError::InvalidDigit(c))?;
            i = digit
                .checked_mul(w)
                .and_then(|dw| i.checked_add(dw))
                .ok_or(IdnaError::Overflow)?;

            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t).ok_or(IdnaError::Overflow)?;
            k += BASE;
            c = digits.next().ok_or(IdnaError::TruncatedInput)?;
        }

        out_len += 1;
        bias = adapt(i - oldi, out_len, oldi == 0);
        n = n.checked_add(i / out_len).ok_or(IdnaError::Overflow)?;
        i %= out_len;

        let decoded = char::from_u32(n).ok_or(IdnaError::InvalidCodePoint(n))?;
        output.insert(i as usize, decoded);
        i += 1;
    }

    Ok(output.into_iter().collect())
}

/// Apply the Unicode-direction conversion to one label of a domain.
///
/// Labels of 1 to 63 bytes that carry the `xn--` prefix are stripped and
/// decoded; every other label passes through unchanged, matching the
/// platform facility's per-label behavior.
///
/// # Examples
///
/// ```
/// use punycodec::decode_label;
///
/// assert_eq!(decode_label("xn--bcher-kva").unwrap(), "bücher");
/// assert_eq!(decode_label("example").unwrap(), "example");
/// ```
pub fn decode_label(label: &str) -> Result<String, IdnaError> {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return Ok(label.to_owned());
    }
    match label.strip_prefix(ACE_PREFIX) {
        Some(encoded) => punycode_decode(encoded),
        None => Ok(label.to_owned()),
    }
}
