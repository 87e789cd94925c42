//! A minimal declaration syntax tree: one package, its imports and struct
//! type declarations.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub package: Ident,
    pub imports: Vec<Import>,
    pub decls: Vec<TypeDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Import {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: Ident,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Ident,
    pub ty: TypeExpr,
}

/// A validated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident(String);

/// A type expression, kept as the text it is written as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr(String);

impl Ident {
    /// Returns `None` unless `name` is a letter or `_` followed by letters,
    /// digits and `_`.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let mut chars = name.chars();

        let valid = match chars.next() {
            Some(first) => {
                (first.is_alphabetic() || first == '_')
                    && chars.all(|c| c.is_alphanumeric() || c == '_')
            }
            None => false,
        };

        valid.then_some(Ident(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TypeExpr {
    /// Returns `None` for an empty expression or one spanning several lines.
    pub fn new(expr: impl Into<String>) -> Option<Self> {
        let expr = expr.into();
        let valid = !expr.trim().is_empty() && !expr.contains(['\n', '\r']);
        valid.then_some(TypeExpr(expr))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
