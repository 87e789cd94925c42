use serde::{Deserialize, Serialize};
use std::fmt;

/// A relationship between a model and another table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Association {
    /// Raw name of the related table.
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    #[serde(rename = "Type", alias = "type")]
    pub kind: AssociationKind,

    /// Kind of the catalog constraint this association was first observed
    /// through (`FOREIGN KEY`, `UNIQUE`, ...). Only meaningful during
    /// classification; never persisted.
    #[serde(skip)]
    pub constraint_kind: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssociationKind {
    /// The model holds a foreign key referencing one row of the target.
    BelongsTo,

    /// The target holds a foreign key to the model, constrained to one row.
    HasOne,

    /// The target holds a foreign key to the model.
    HasMany,
}

impl Association {
    pub fn new(name: impl Into<String>, kind: AssociationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            constraint_kind: None,
        }
    }

    pub fn belongs_to(name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::BelongsTo)
    }

    pub fn has_one(name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::HasOne)
    }

    pub fn has_many(name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::HasMany)
    }

    pub fn with_constraint_kind(mut self, constraint_kind: impl Into<String>) -> Self {
        self.constraint_kind = Some(constraint_kind.into());
        self
    }

    /// Returns `true` if the association is a single optional reference.
    pub fn is_single(&self) -> bool {
        matches!(self.kind, AssociationKind::BelongsTo | AssociationKind::HasOne)
    }
}

// Equality covers the persisted fields only.
impl PartialEq for Association {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for Association {}

impl AssociationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AssociationKind::BelongsTo => "belongsTo",
            AssociationKind::HasOne => "hasOne",
            AssociationKind::HasMany => "hasMany",
        }
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
