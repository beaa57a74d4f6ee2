#![doc = include_str!("../README.md")]

use crate::visitor::{ConstDecl, ConstVisitor};
use respak_shared::{ResourceIdSet, VERSION_HASH_IDENT};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use syn::ext::IdentExt as _;
use syn::{Expr, Lit, Type, UnOp};
use walkdir::WalkDir;

pub mod error;
mod visitor;

use error::RespakScParserError;

const UNSIGNED_TYPES: &[&str] = &["u8", "u16", "u32", "u64", "u128", "usize"];

/// Constants referring to constants referring to constants... give up here.
const MAX_REFERENCE_DEPTH: usize = 32;

/// Parses the resource identifiers declared at `path`, a Rust file or a
/// directory of Rust files.
pub fn parse_path(path: &Path) -> Result<ResourceIdSet, RespakScParserError> {
    let metadata =
        fs_err::metadata(path).map_err(|e| RespakScParserError::Io(path.to_path_buf(), e))?;
    if metadata.is_dir() {
        parse_directory(path)
    } else {
        parse_file(path)
    }
}

/// Parses every `.rs` file below `dir_path` and merges their identifiers.
///
/// # Errors
///
/// Fails if the directory cannot be read, if any file fails to parse, or if
/// two files declare the same constant.
pub fn parse_directory(dir_path: &Path) -> Result<ResourceIdSet, RespakScParserError> {
    tracing::info!(
        "Reading resource identifiers from directory: {}",
        dir_path.display()
    );

    let rust_files: Vec<PathBuf> = WalkDir::new(dir_path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_file()
                    && let Some(ext) = path.extension()
                    && ext == "rs"
                {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            },
            Err(e) => Some(Err(RespakScParserError::WalkDir(dir_path.to_path_buf(), e))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Found {} Rust files to parse.", rust_files.len());

    let mut ids = ResourceIdSet::default();
    for file_path in &rust_files {
        let file_ids = parse_file(file_path)?;

        if !file_ids.version_hash.is_empty() {
            if !ids.version_hash.is_empty() {
                return Err(RespakScParserError::Duplicate(
                    file_path.clone(),
                    VERSION_HASH_IDENT.to_string(),
                ));
            }
            ids.version_hash = file_ids.version_hash;
        }
        for (name, id) in file_ids.names {
            if ids.names.contains_key(&name) {
                return Err(RespakScParserError::Duplicate(file_path.clone(), name));
            }
            ids.names.insert(name, id);
        }
    }

    tracing::info!(
        "Finished parsing. Found {} resource identifiers.",
        ids.len()
    );
    Ok(ids)
}

/// Parses the resource identifiers declared in a single Rust file.
pub fn parse_file(path: &Path) -> Result<ResourceIdSet, RespakScParserError> {
    tracing::trace!("Parsing file: {}", path.display());
    let content = fs_err::read_to_string(path)
        .map_err(|e| RespakScParserError::Io(path.to_path_buf(), e))?;
    parse_source(&content, path)
}

/// Parses the resource identifiers declared in `source`.
///
/// `origin` only labels errors.
pub fn parse_source(source: &str, origin: &Path) -> Result<ResourceIdSet, RespakScParserError> {
    let syntax_tree =
        syn::parse_file(source).map_err(|e| RespakScParserError::Syn(origin.to_path_buf(), e))?;

    let mut visitor = ConstVisitor::new();
    syn::visit::visit_file(&mut visitor, &syntax_tree);
    let consts = visitor.into_consts();

    Extractor::new(origin, &consts)?.extract()
}

struct Extractor<'a> {
    origin: &'a Path,
    consts: &'a [ConstDecl],
    /// Identifier constants by name, targets for path values.
    identifiers: HashMap<&'a str, &'a ConstDecl>,
}

impl<'a> Extractor<'a> {
    fn new(origin: &'a Path, consts: &'a [ConstDecl]) -> Result<Self, RespakScParserError> {
        let mut identifiers = HashMap::new();
        for decl in consts.iter().filter(|decl| is_identifier(decl)) {
            if identifiers.insert(decl.name.as_str(), decl).is_some() {
                return Err(RespakScParserError::Duplicate(
                    origin.to_path_buf(),
                    decl.name.clone(),
                ));
            }
        }
        Ok(Self {
            origin,
            consts,
            identifiers,
        })
    }

    fn extract(&self) -> Result<ResourceIdSet, RespakScParserError> {
        let mut ids = ResourceIdSet::default();
        let mut version_hash_seen = false;

        for decl in self.consts {
            if decl.name == VERSION_HASH_IDENT {
                if !is_str_ref(&decl.ty) {
                    tracing::warn!(
                        "In '{}': ignoring '{}', it is not a string constant",
                        self.origin.display(),
                        decl.name
                    );
                    continue;
                }
                if version_hash_seen {
                    return Err(self.duplicate(&decl.name));
                }
                ids.version_hash = self.string_value(&decl.name, &decl.expr)?;
                version_hash_seen = true;
            } else if is_identifier(decl) {
                let id = self.evaluate(&decl.name, &decl.expr, 0)?;
                ids.names.insert(decl.name.clone(), id);
            } else {
                tracing::trace!("Skipping constant '{}'", decl.name);
            }
        }

        tracing::debug!(
            "Read {} resource identifiers from {}",
            ids.len(),
            self.origin.display()
        );
        Ok(ids)
    }

    /// Evaluates the value of the identifier constant `name`.
    fn evaluate(&self, name: &str, expr: &Expr, depth: usize) -> Result<u64, RespakScParserError> {
        match expr {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Int(int) => int
                    .base10_parse::<u64>()
                    .map_err(|_| self.not_an_integer(name)),
                _ => Err(self.not_an_integer(name)),
            },
            Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
                Err(self.not_an_integer(name))
            },
            Expr::Paren(paren) => self.evaluate(name, &paren.expr, depth),
            Expr::Group(group) => self.evaluate(name, &group.expr, depth),
            Expr::Cast(cast) if is_unsigned(&cast.ty) => self.evaluate(name, &cast.expr, depth),
            Expr::Path(path) if path.qself.is_none() && depth < MAX_REFERENCE_DEPTH => {
                let target = path
                    .path
                    .get_ident()
                    .map(|ident| ident.unraw().to_string())
                    .and_then(|target| self.identifiers.get(target.as_str()).copied());
                match target {
                    Some(decl) => self.evaluate(name, &decl.expr, depth + 1),
                    None => Err(self.unresolved(name)),
                }
            },
            _ => Err(self.unresolved(name)),
        }
    }

    fn string_value(&self, name: &str, expr: &Expr) -> Result<String, RespakScParserError> {
        match expr {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Str(s) => Ok(s.value()),
                _ => Err(self.unresolved(name)),
            },
            Expr::Paren(paren) => self.string_value(name, &paren.expr),
            Expr::Group(group) => self.string_value(name, &group.expr),
            _ => Err(self.unresolved(name)),
        }
    }

    fn unresolved(&self, name: &str) -> RespakScParserError {
        RespakScParserError::UnresolvedValue(self.origin.to_path_buf(), name.to_string())
    }

    fn not_an_integer(&self, name: &str) -> RespakScParserError {
        RespakScParserError::NotAnInteger(self.origin.to_path_buf(), name.to_string())
    }

    fn duplicate(&self, name: &str) -> RespakScParserError {
        RespakScParserError::Duplicate(self.origin.to_path_buf(), name.to_string())
    }
}

/// Whether `decl` declares a resource identifier.
fn is_identifier(decl: &ConstDecl) -> bool {
    decl.name != "_" && decl.name != VERSION_HASH_IDENT && is_unsigned(&decl.ty)
}

fn is_unsigned(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            UNSIGNED_TYPES.iter().any(|name| path.path.is_ident(name))
        },
        Type::Paren(paren) => is_unsigned(&paren.elem),
        Type::Group(group) => is_unsigned(&group.elem),
        _ => false,
    }
}

/// `&str` or `&'static str`.
fn is_str_ref(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => {
            reference.mutability.is_none()
                && reference
                    .lifetime
                    .as_ref()
                    .is_none_or(|lifetime| lifetime.ident == "static")
                && matches!(
                    &*reference.elem,
                    Type::Path(path) if path.qself.is_none() && path.path.is_ident("str")
                )
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn parse(source: &str) -> Result<ResourceIdSet, RespakScParserError> {
        parse_source(source, Path::new("resid.rs"))
    }

    fn pairs(ids: &ResourceIdSet) -> Vec<(&str, u64)> {
        ids.names.iter().map(|(n, id)| (n.as_str(), *id)).collect()
    }

    #[test]
    fn test_parse_generated_declarations() {
        let ids = parse(
            r#"
// Code generated by "respak resid"; DO NOT EDIT.

/// String uniquely identifying this set of resource identifiers.
pub const VERSION_HASH: &str = "abc123";
#[allow(non_upper_case_globals)]
pub const A: usize = 0;
#[allow(non_upper_case_globals)]
pub const B: usize = 1;
#[allow(non_upper_case_globals)]
pub const r#type: usize = 2;
"#,
        )
        .unwrap();

        assert_eq!(ids.version_hash, "abc123");
        assert_eq!(pairs(&ids), vec![("A", 0), ("B", 1), ("type", 2)]);
        assert_eq!(ids.max_id(), 2);
    }

    #[test]
    fn test_empty_source() {
        let ids = parse("").unwrap();
        assert!(ids.is_empty());
        assert!(ids.version_hash.is_empty());
    }

    #[test]
    fn test_other_types_are_ignored() {
        let ids = parse(
            r#"
const A: usize = 0;
const LABEL: &str = "label";
const RATIO: f32 = 0.5;
const SIGNED: i32 = -1;
const NAMES: [&str; 1] = ["x"];
static STATIC_ID: usize = 9;
const _: usize = 4;
"#,
        )
        .unwrap();

        assert_eq!(pairs(&ids), vec![("A", 0)]);
        assert!(ids.version_hash.is_empty());
    }

    #[test]
    fn test_version_hash_with_other_type_is_ignored() {
        let ids = parse("const VERSION_HASH: u32 = 5; const A: u8 = 0;").unwrap();
        assert!(ids.version_hash.is_empty());
        assert_eq!(pairs(&ids), vec![("A", 0)]);
    }

    #[test]
    fn test_version_hash_with_static_lifetime() {
        let ids = parse(r#"pub const VERSION_HASH: &'static str = ("h");"#).unwrap();
        assert_eq!(ids.version_hash, "h");
    }

    #[test]
    fn test_version_hash_must_be_a_literal() {
        let result = parse(r#"const VERSION_HASH: &str = concat!("a", "b");"#);
        assert!(
            matches!(result, Err(RespakScParserError::UnresolvedValue(_, name)) if name == "VERSION_HASH")
        );
    }

    #[rstest]
    #[case("const A: u8 = 7;", 7)]
    #[case("const A: u16 = 7u16;", 7)]
    #[case("const A: u32 = 0x10;", 16)]
    #[case("const A: u64 = 1_000;", 1000)]
    #[case("const A: u128 = (3);", 3)]
    #[case("const A: usize = 5u8 as usize;", 5)]
    #[case("const B: usize = 4; const A: usize = B;", 4)]
    #[case("const C: u8 = 2; const B: u16 = C as u16; const A: usize = B as usize;", 2)]
    fn test_identifier_values(#[case] source: &str, #[case] expected: u64) {
        let ids = parse(source).unwrap();
        assert_eq!(ids.get("A"), Some(expected));
    }

    #[test]
    fn test_consts_in_inline_modules_are_found() {
        let ids = parse("mod resid { pub const A: usize = 0; mod inner { const B: usize = 1; } }")
            .unwrap();
        assert_eq!(pairs(&ids), vec![("A", 0), ("B", 1)]);
    }

    #[test]
    fn test_consts_in_function_bodies_and_impls_are_ignored() {
        let ids = parse(
            "fn f() { const A: usize = 0; } struct S; impl S { const B: usize = 1; } const C: usize = 2;",
        )
        .unwrap();
        assert_eq!(pairs(&ids), vec![("C", 2)]);
    }

    #[rstest]
    #[case("const A: usize = -1;")]
    #[case("const A: u32 = 1.5;")]
    #[case("const A: u32 = \"1\";")]
    #[case("const A: u32 = true;")]
    #[case("const A: u128 = 18446744073709551616;")]
    fn test_non_integer_values(#[case] source: &str) {
        let result = parse(source);
        assert!(
            matches!(&result, Err(RespakScParserError::NotAnInteger(_, name)) if name == "A"),
            "{source}: {result:?}"
        );
    }

    #[rstest]
    #[case("const A: usize = other::B;")]
    #[case("const A: usize = MISSING;")]
    #[case("const A: usize = 1 + 1;")]
    #[case("const A: usize = len();")]
    #[case("const A: usize = B as i32; const B: usize = 0;")]
    #[case("const A: usize = B; const B: usize = A;")]
    fn test_unresolvable_values(#[case] source: &str) {
        let result = parse(source);
        assert!(
            matches!(&result, Err(RespakScParserError::UnresolvedValue(_, name)) if name == "A"),
            "{source}: {result:?}"
        );
    }

    #[test]
    fn test_duplicate_identifier_in_modules() {
        let result = parse("mod a { const X: usize = 0; } mod b { const X: usize = 1; }");
        assert!(matches!(result, Err(RespakScParserError::Duplicate(_, name)) if name == "X"));
    }

    #[test]
    fn test_invalid_rust_is_a_syntax_error() {
        let result = parse("const A: usize = ;");
        assert!(matches!(result, Err(RespakScParserError::Syn(_, _))));
    }

    #[test]
    fn test_parse_directory_empty() {
        let temp_dir = TempDir::new().unwrap();
        let result = parse_directory(temp_dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_path_with_nonexistent_path() {
        let result = parse_path(Path::new("/non/existent/path"));
        assert!(matches!(result, Err(RespakScParserError::Io(_, _))));
    }

    #[test]
    fn test_parse_directory_merges_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("hash.rs"),
            r#"pub const VERSION_HASH: &str = "h";"#,
        )
        .unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(
            temp_dir.path().join("nested/ids.rs"),
            "pub const A: usize = 0; pub const B: usize = 1;",
        )
        .unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not rust").unwrap();

        let ids = parse_path(temp_dir.path()).unwrap();
        assert_eq!(ids.version_hash, "h");
        assert_eq!(ids.get("A"), Some(0));
        assert_eq!(ids.get("B"), Some(1));
    }

    #[test]
    fn test_parse_directory_rejects_duplicates_across_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.rs"), "pub const A: usize = 0;").unwrap();
        fs::write(temp_dir.path().join("b.rs"), "pub const A: usize = 0;").unwrap();

        let result = parse_directory(temp_dir.path());
        assert!(matches!(result, Err(RespakScParserError::Duplicate(path, name))
            if name == "A" && path.ends_with("b.rs")));
    }

    #[test]
    fn test_references_do_not_cross_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.rs"), "pub const A: usize = 0;").unwrap();
        fs::write(temp_dir.path().join("b.rs"), "pub const B: usize = A;").unwrap();

        let result = parse_directory(temp_dir.path());
        assert!(matches!(result, Err(RespakScParserError::UnresolvedValue(_, name)) if name == "B"));
    }
}
