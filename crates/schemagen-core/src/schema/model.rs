use super::{Association, Column};
use serde::{Deserialize, Serialize};

/// One base table with its columns and inferred relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Raw table name.
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    #[serde(rename = "Fields", alias = "fields", default)]
    pub fields: Vec<Column>,

    #[serde(rename = "Associations", alias = "associations", default)]
    pub associations: Vec<Association>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
            associations: vec![],
        }
    }

    pub fn field(mut self, column: Column) -> Self {
        self.fields.push(column);
        self
    }

    pub fn association(mut self, association: Association) -> Self {
        self.associations.push(association);
        self
    }
}
