//! Name and import rewriting for contracts built on `@openzeppelin/contracts-upgradeable`.

const CONTRACTS: &str = "@openzeppelin/contracts/";
const CONTRACTS_UPGRADEABLE: &str = "@openzeppelin/contracts-upgradeable/";
const SUFFIX: &str = "Upgradeable";

/// Interfaces (`IERC165`) are shared by both packages and keep their name.
fn is_interface(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('I') && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Upgradeable counterpart of a contract or library name.
///
/// The suffix goes on the leading segment of a qualified name, so
/// `Counters.Counter` becomes `CountersUpgradeable.Counter`. Names that
/// already carry the suffix are returned unchanged.
pub fn upgradeable_name(name: &str) -> String {
    if name == "Initializable" || is_interface(name) {
        return name.to_string();
    }
    let split = name.find('.').unwrap_or(name.len());
    let (head, tail) = name.split_at(split);
    if head.ends_with(SUFFIX) {
        name.to_string()
    } else {
        format!("{head}{SUFFIX}{tail}")
    }
}

/// Upgradeable counterpart of an `@openzeppelin/contracts` import path.
///
/// Other paths, including ones already in the upgradeable package, are
/// returned unchanged.
pub fn upgradeable_import(path: &str) -> String {
    let Some(rest) = path.strip_prefix(CONTRACTS) else {
        return path.to_string();
    };
    let (dir, file) = match rest.rsplit_once('/') {
        Some((dir, file)) => (format!("{dir}/"), file),
        None => (String::new(), rest),
    };
    let (stem, ext) = match file.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{ext}")),
        None => (file, String::new()),
    };
    format!(
        "{CONTRACTS_UPGRADEABLE}{dir}{}{ext}",
        upgradeable_name(stem)
    )
}

/// Rewrite the type of a raw declaration line such as
/// `Counters.Counter private _tokenIdCounter;`.
///
/// Only a capitalized, dot-qualified leading type is touched; comments and
/// elementary types pass through.
pub fn upgradeable_variable(line: &str) -> String {
    let end = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    let (ident, rest) = line.split_at(end);
    let qualified_type = ident.starts_with(|c: char| c.is_ascii_uppercase()) && rest.starts_with('.');
    if qualified_type {
        format!("{}{rest}", upgradeable_name(ident))
    } else {
        line.to_string()
    }
}
