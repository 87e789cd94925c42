use serde::{Deserialize, Serialize};

/// A direct table column.
///
/// `ty` is a semantic type tag from the [`TypeMap`](crate::TypeMap), used
/// verbatim as the field's type expression when generating declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Raw column name as reported by the catalog.
    #[serde(rename = "name", alias = "Name")]
    pub name: String,

    #[serde(rename = "type", alias = "Type")]
    pub ty: String,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
