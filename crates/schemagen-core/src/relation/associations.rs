use crate::schema::{Association, AssociationKind};

use indexmap::IndexMap;

/// Per-table association lists, keyed by table name.
///
/// Lists are append-only except for the in-place `hasMany` → `hasOne`
/// upgrade, and [`Associations::upsert`] is the only way to modify them. A
/// list never holds two associations with the same name.
#[derive(Debug, Default, Clone)]
pub struct Associations {
    by_table: IndexMap<String, Vec<Association>>,
}

/// Outcome of [`Associations::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No association with this name existed; it was appended.
    Inserted,

    /// An existing `hasMany` was upgraded to `hasOne`.
    Replaced,

    /// An association with this name already existed and was kept as is.
    Unchanged,
}

impl Associations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `association` to `table`'s list.
    ///
    /// If the name is already present, the existing entry wins, except that
    /// an existing `hasMany` observed again as `hasMany` through a different
    /// constraint kind becomes `hasOne`.
    pub fn upsert(&mut self, table: &str, association: Association) -> Upsert {
        let list = self.by_table.entry(table.to_string()).or_default();

        let Some(existing) = list.iter_mut().find(|a| a.name == association.name) else {
            list.push(association);
            return Upsert::Inserted;
        };

        if existing.kind == AssociationKind::HasMany
            && association.kind == AssociationKind::HasMany
            && existing.constraint_kind != association.constraint_kind
        {
            existing.kind = AssociationKind::HasOne;
            return Upsert::Replaced;
        }

        Upsert::Unchanged
    }

    /// Returns `table`'s associations, or an empty slice.
    pub fn get(&self, table: &str) -> &[Association] {
        self.by_table.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Removes and returns `table`'s associations.
    pub fn take(&mut self, table: &str) -> Vec<Association> {
        self.by_table.shift_remove(table).unwrap_or_default()
    }

    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.by_table.keys().map(String::as_str)
    }
}

impl Upsert {
    pub fn replaced(self) -> bool {
        matches!(self, Upsert::Replaced)
    }
}
