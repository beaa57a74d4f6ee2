#![doc = include_str!("../README.md")]

pub mod document;
pub mod names;
pub mod resid;

pub use document::{PackedTable, StringsDocument};
pub use names::{NameSet, fingerprint};
pub use resid::{ResourceIdSet, VerifyError};

/// Numeric identifier assigned to a translation name.
pub type ResourceId = usize;

/// Name of the generated constant holding the fingerprint.
pub const VERSION_HASH_IDENT: &str = "VERSION_HASH";
