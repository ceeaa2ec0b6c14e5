//! Domain-level orchestration around the label codec.
//!
//! Splitting on dots, per-label conversion, and whole-domain length
//! enforcement live here; the codec below stays label-only.

pub mod convert;

// Re-export main functionality
pub use convert::{domain_to_ascii, domain_to_unicode, to_ascii, to_unicode};
