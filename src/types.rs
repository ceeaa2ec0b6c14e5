//! Core types and wire-contract constants for IDNA conversion.

/// The ACE prefix marking a punycode-encoded label.
pub const ACE_PREFIX: &str = "xn--";

/// Separator between the literal and encoded sections of a punycode label.
pub const LABEL_DELIMITER: char = '-';

/// Maximum length of a single encoded label, in bytes, including the prefix.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of a full domain, in bytes.
pub const MAX_DOMAIN_LENGTH: usize = 255;

/// IDNA processing variant.
///
/// Selects between the original IDNA 2003 behavior and the newer UTS-46
/// behavior. The only difference in this implementation is that the UTS-46
/// variant lowercases the whole domain before encoding, matching the
/// platform facility it substitutes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdnaVariant {
    /// Original IDNA 2003 processing: input is encoded as given.
    Idna2003,
    /// UTS-46 processing: input is lowercased before encoding.
    Uts46,
}

impl IdnaVariant {
    /// Get the numeric code of this variant (2003 = 0, UTS-46 = 1).
    pub fn code(self) -> u32 {
        match self {
            IdnaVariant::Idna2003 => 0,
            IdnaVariant::Uts46 => 1,
        }
    }

    /// Create a variant from its numeric code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(IdnaVariant::Idna2003),
            1 => Some(IdnaVariant::Uts46),
            _ => None,
        }
    }
}

impl Default for IdnaVariant {
    fn default() -> Self {
        IdnaVariant::Uts46
    }
}

/// Option flags accepted by the conversion entry points.
///
/// The flag values mirror the numeric constants of the standard intl
/// facility. They are carried for interface compatibility only: none of
/// them alters codec behavior in this implementation, which performs no
/// STD3, bidi, or contextual-rule validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdnaOptions {
    bits: u32,
}

impl IdnaOptions {
    /// Permit code points that are unassigned in the underlying Unicode
    /// repertoire.
    pub const ALLOW_UNASSIGNED: u32 = 1;
    /// Restrict labels to STD3 ASCII host-name characters.
    pub const USE_STD3_RULES: u32 = 2;
    /// Check labels against the Bidi rule.
    pub const CHECK_BIDI: u32 = 4;
    /// Check labels against the ContextJ rules.
    pub const CHECK_CONTEXTJ: u32 = 8;
    /// Use nontransitional processing when converting to ASCII.
    pub const NONTRANSITIONAL_TO_ASCII: u32 = 16;
    /// Use nontransitional processing when converting to Unicode.
    pub const NONTRANSITIONAL_TO_UNICODE: u32 = 32;

    /// Create an option set from raw flag bits.
    pub fn new(bits: u32) -> Self {
        IdnaOptions { bits }
    }

    /// Get the raw flag bits.
    pub fn bits(self) -> u32 {
        self.bits
    }

    /// Check whether a given flag is set.
    pub fn contains(self, flag: u32) -> bool {
        self.bits & flag != 0
    }
}
