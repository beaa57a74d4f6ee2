#![doc = include_str!("../README.md")]

pub use respak_manager_core::{Domain, Language, LocalizationError, parse_table, read_table};
pub use respak_shared::{PackedTable, ResourceId, ResourceIdSet, StringsDocument};

#[cfg(feature = "generate")]
pub use respak_generate as generate;

#[cfg(feature = "generate")]
pub use respak_sc_parser as extract;

/// Includes the declarations written by `respak-build` into the current
/// module.
///
/// ```rust,ignore
/// mod resid {
///     respak::include_resid!();
/// }
/// ```
#[macro_export]
macro_rules! include_resid {
    () => {
        include!(concat!(env!("OUT_DIR"), "/resid.rs"));
    };
}

/// Includes a table packed by `respak-build` and loads it into `domain`.
///
/// `$file` is the packed file name, e.g. `"en.pak.json"`.
#[macro_export]
macro_rules! load_packed {
    ($domain:expr, $file:literal) => {
        $domain.load_str(include_str!(concat!(env!("OUT_DIR"), "/packs/", $file)))
    };
}
