//! Symbol mangling for operator and field-operator definitions.
//!
//! Operator overloads share the global name space with ordinary variables.
//! Their storage names are formed by prefixing the symbol text with a
//! kind-specific header:
//!
//! | kind | header |
//! |---|---|
//! | `Operator`, `FieldRead` | `__LRop_` |
//! | `FieldWrite` | `__LRaop_` |
//! | `VarName` | `__LRvop_` |
//!
//! The scanner refuses user identifiers that start with any header, so a
//! mangled name can never alias a user-chosen global.

/// Header for infix/postfix operators and field-read operators.
pub const OPERATOR_HEADER: &str = "__LRop_";
/// Header for field operators that handle assignment.
pub const FIELD_WRITE_HEADER: &str = "__LRaop_";
/// Header for operators with variable-like names.
pub const VAR_OPERATOR_HEADER: &str = "__LRvop_";

/// All mangling headers. None is a prefix of another.
pub const HEADERS: [&str; 3] = [OPERATOR_HEADER, FIELD_WRITE_HEADER, VAR_OPERATOR_HEADER];

/// Kind of mangling applied to the next symbol name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MangleKind {
    /// Plain identifier; the mangler is not involved.
    #[default]
    None,
    /// Definition kind not yet known; the scanner decides from the symbol.
    Unknown,
    /// Infix or postfix symbolic operator.
    Operator,
    /// Field operator governing indexed reads.
    FieldRead,
    /// Field operator governing indexed writes.
    FieldWrite,
    /// Operator spelled like a variable name.
    VarName,
}

impl MangleKind {
    /// Header for this kind, `None` for the kinds that never mangle.
    pub const fn header(self) -> Option<&'static str> {
        match self {
            MangleKind::None | MangleKind::Unknown => None,
            MangleKind::Operator | MangleKind::FieldRead => Some(OPERATOR_HEADER),
            MangleKind::FieldWrite => Some(FIELD_WRITE_HEADER),
            MangleKind::VarName => Some(VAR_OPERATOR_HEADER),
        }
    }

    /// Parse the names used on the command line and in diagnostics.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(MangleKind::None),
            "unknown" => Some(MangleKind::Unknown),
            "operator" | "op" => Some(MangleKind::Operator),
            "field-read" | "index" => Some(MangleKind::FieldRead),
            "field-write" | "newindex" => Some(MangleKind::FieldWrite),
            "vname" | "var-name" => Some(MangleKind::VarName),
            _ => None,
        }
    }
}

/// Produce the storage name for `symbol` under `kind`.
///
/// Returns `None` for `MangleKind::None` and `MangleKind::Unknown`: a plain
/// identifier is used as-is, and an unresolved kind has no header.
pub fn mangle(kind: MangleKind, symbol: &[u8]) -> Option<Vec<u8>> {
    let header = kind.header()?;
    let mut out = Vec::with_capacity(header.len() + symbol.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(symbol);
    Some(out)
}

/// UTF-8 convenience wrapper around [`mangle`].
pub fn mangle_str(kind: MangleKind, symbol: &str) -> Option<String> {
    let header = kind.header()?;
    Some(format!("{header}{symbol}"))
}

/// Does `name` start with one of the mangling headers?
pub fn has_mangling_header(name: &[u8]) -> bool {
    HEADERS.iter().any(|h| name.starts_with(h.as_bytes()))
}

/// Split a mangled name into its kind and symbol text.
///
/// `__LRop_` names report `MangleKind::Operator`; field-read operators share
/// that header and cannot be told apart after mangling.
pub fn demangle(name: &[u8]) -> Option<(MangleKind, &[u8])> {
    [
        (MangleKind::Operator, OPERATOR_HEADER),
        (MangleKind::FieldWrite, FIELD_WRITE_HEADER),
        (MangleKind::VarName, VAR_OPERATOR_HEADER),
    ]
    .into_iter()
    .find_map(|(kind, header)| {
        name.strip_prefix(header.as_bytes())
            .map(|symbol| (kind, symbol))
    })
}

#[cfg(test)]
mod tests;
