//! Renders a name set as Rust constant declarations.

use crate::{RespakGenerateError, write_if_changed};
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use respak_shared::{NameSet, VERSION_HASH_IDENT};
use std::path::Path;
use syn::Ident;
use syn::ext::IdentExt as _;

/// Renders the declarations for `names`.
///
/// `generated_by` is the command line recorded in the header comment.
pub fn render_declarations(
    names: &NameSet,
    generated_by: &str,
) -> Result<String, RespakGenerateError> {
    let version_hash_ident = format_ident!("{}", VERSION_HASH_IDENT);
    let version_hash = names.fingerprint();

    let resource_ids = names
        .assignments()
        .map(|(id, name)| {
            let ident = const_ident(name)?;
            let doc = format!(" Resource identifier for `{}`.", name);
            let id = Literal::usize_unsuffixed(id);
            Ok(quote! {
                #[doc = #doc]
                #[allow(non_upper_case_globals)]
                pub const #ident: usize = #id;
            })
        })
        .collect::<Result<TokenStream, RespakGenerateError>>()?;

    let tokens = quote! {
        /// String uniquely identifying this set of resource identifiers.
        pub const #version_hash_ident: &str = #version_hash;

        #resource_ids
    };

    let file: syn::File = syn::parse2(tokens)?;
    Ok(format!(
        "// Code generated by \"{}\"; DO NOT EDIT.\n\n{}",
        generated_by,
        prettyplease::unparse(&file)
    ))
}

/// Renders the declarations for `names` and writes them to `path`.
///
/// Returns whether the file changed.
pub fn write_declarations(
    path: &Path,
    names: &NameSet,
    generated_by: &str,
) -> Result<bool, RespakGenerateError> {
    let content = render_declarations(names, generated_by)?;
    let changed = write_if_changed(path, &content)?;
    if changed {
        tracing::info!(
            "Updated resource IDs: {} ({} names)",
            path.display(),
            names.len()
        );
    } else {
        tracing::info!("Resource IDs unchanged: {}", path.display());
    }
    Ok(changed)
}

/// Maps a translation name to the identifier of its constant.
///
/// Keywords become raw identifiers. Names that would not read back verbatim
/// are rejected.
fn const_ident(name: &str) -> Result<Ident, RespakGenerateError> {
    if name == VERSION_HASH_IDENT {
        return Err(RespakGenerateError::ReservedName(name.to_string()));
    }

    let ident = syn::parse_str::<Ident>(name)
        .or_else(|_| syn::parse_str::<Ident>(&format!("r#{}", name)))
        .map_err(|_| RespakGenerateError::InvalidName(name.to_string()))?;

    if ident.unraw() != name {
        return Err(RespakGenerateError::InvalidName(name.to_string()));
    }
    Ok(ident)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    fn names(input: &[&str]) -> NameSet {
        input.iter().copied().collect()
    }

    /// Renders `set` with its fingerprint masked.
    fn render_masked(set: &NameSet, generated_by: &str) -> String {
        render_declarations(set, generated_by)
            .unwrap()
            .replace(&set.fingerprint(), "[VERSION_HASH]")
    }

    #[test]
    fn test_render_declarations() {
        let set = names(&["Greeting", "Farewell", "type"]);
        assert_snapshot!(render_masked(&set, "respak resid i18n"));
    }

    #[test]
    fn test_render_embeds_fingerprint() {
        let set = names(&["Greeting", "Farewell"]);
        let source = render_declarations(&set, "respak resid").unwrap();
        assert!(source.contains(&format!(
            "pub const VERSION_HASH: &str = \"{}\";",
            set.fingerprint()
        )));
        assert!(!source.contains("usize = 0usize"));
    }

    #[test]
    fn test_render_empty_set_declares_only_hash() {
        let source = render_declarations(&NameSet::new(), "respak resid").unwrap();
        assert!(source.contains("pub const VERSION_HASH: &str"));
        assert!(!source.contains("usize"));
    }

    #[test]
    fn test_keywords_become_raw_identifiers() {
        let source = render_declarations(&names(&["type"]), "respak resid").unwrap();
        assert!(source.contains("pub const r#type: usize = 0;"));
    }

    #[rstest]
    #[case("menu.open")]
    #[case("1st")]
    #[case("with space")]
    #[case("_")]
    #[case("self")]
    #[case("r#raw")]
    #[case("")]
    fn test_invalid_names_are_rejected(#[case] name: &str) {
        let result = render_declarations(&names(&[name]), "respak resid");
        assert!(
            matches!(&result, Err(RespakGenerateError::InvalidName(n)) if n == name),
            "{name:?} gave {result:?}"
        );
    }

    #[test]
    fn test_version_hash_name_is_reserved() {
        let result = render_declarations(&names(&["VERSION_HASH"]), "respak resid");
        assert!(matches!(result, Err(RespakGenerateError::ReservedName(_))));
    }

    #[test]
    fn test_write_declarations_reports_changes() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("src/resid.rs");
        let set = names(&["A"]);

        assert!(write_declarations(&path, &set, "respak resid").unwrap());
        assert!(!write_declarations(&path, &set, "respak resid").unwrap());
        assert!(write_declarations(&path, &names(&["A", "B"]), "respak resid").unwrap());
    }
}
