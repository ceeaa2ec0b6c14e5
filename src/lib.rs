//! Punycode/IDNA domain label transcoding.
//!
//! This crate converts internationalized domain names between their Unicode
//! form and the `xn--`-prefixed ASCII-compatible encoding (ACE) used on the
//! wire, implementing the Punycode codec of RFC 3492 with RFC 3490-style
//! domain processing.
//!
//! # Features
//!
//! - **Bidirectional**: encode Unicode labels to ACE and decode them back,
//!   with the two directions sharing one set of bias primitives so they stay
//!   exactly invertible
//! - **Bit-for-bit conformant**: thresholds, bias adaptation, and truncating
//!   integer division follow RFC 3492 exactly
//! - **Domain-aware**: `to_ascii`/`to_unicode` handle dot-splitting, empty
//!   label rejection, and the 63-byte label / 255-byte domain ceilings
//! - **Pure and stateless**: no I/O, no global mutable state; every call owns
//!   its working buffers
//!
//! # Quick Start
//!
//! ```
//! use punycodec::{to_ascii, to_unicode};
//!
//! // Encode a domain to its ASCII form
//! let ascii = to_ascii("bücher.example")?;
//! assert_eq!(ascii, "xn--bcher-kva.example");
//!
//! // And decode it back
//! let unicode = to_unicode(&ascii)?;
//! assert_eq!(unicode, "bücher.example");
//!
//! // Pure-ASCII domains pass through unchanged
//! assert_eq!(to_ascii("example.com")?, "example.com");
//! # Ok::<(), punycodec::IdnaError>(())
//! ```
//!
//! # Bootstring Parameters
//!
//! The codec uses the RFC 3492 parameter set:
//!
//! | Parameter    | Value | Role |
//! |--------------|-------|------|
//! | base         | 36    | digit alphabet size (`a`-`z`, `0`-`9`) |
//! | tmin / tmax  | 1 / 26| per-digit threshold clamps |
//! | skew / damp  | 38 / 700 | bias adaptation tuning |
//! | initial bias | 72    | starting bias |
//! | initial n    | 128   | first non-basic code point |
//!
//! # Error Handling
//!
//! All functions return `Result<T, IdnaError>`. A failure on any single
//! label fails the whole domain operation; no partial domain is ever
//! returned. Common error cases:
//!
//! - Empty labels during ASCII encoding (`a..b`)
//! - Encoded labels over 63 bytes, or domains over 255 bytes
//! - Decode input containing characters outside the `a-z0-9` digit alphabet

// Re-export the label codec
pub use codec::{decode_label, encode_label, punycode_decode, punycode_encode};

// Re-export domain-level conversion
pub use domain::{domain_to_ascii, domain_to_unicode, to_ascii, to_unicode};

// Re-export public types and the wire contract
pub use error::IdnaError;
pub use types::{IdnaOptions, IdnaVariant};
pub use types::{ACE_PREFIX, LABEL_DELIMITER, MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};

// Module declarations
pub mod codec;
pub mod domain;
pub mod error;
pub mod types;
