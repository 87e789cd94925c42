use crate::{schema::Column, Error, Result};

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Whether a catalog column accepts `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    Nullable,
    NotNull,
}

/// Maps `(nullability, raw catalog type)` to a semantic type tag.
///
/// Tags are the type expressions written into generated declarations. A raw
/// type without an entry for the column's nullability is unmapped: the
/// column is dropped and reported as an [`Error::unmapped_type`] warning.
#[derive(Debug, Clone)]
pub struct TypeMap {
    entries: IndexMap<(Nullability, String), String>,
}

/// An operator-supplied type map entry, as read from a JSON override file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeMapEntry {
    pub nullable: bool,
    pub data_type: String,
    #[serde(rename = "type")]
    pub ty: String,
}

use Nullability::{NotNull, Nullable};

const DEFAULT_TYPES: &[(Nullability, &str, &str)] = &[
    (Nullable, "integer", "null.Int"),
    (Nullable, "smallint", "null.Int"),
    (Nullable, "real", "null.Float"),
    (Nullable, "numeric", "null.Float"),
    (Nullable, "double precision", "null.Float"),
    (Nullable, "text", "null.String"),
    (Nullable, "boolean", "null.Bool"),
    (Nullable, "jsonb", "*datatypes.JSON"),
    (Nullable, "date", "null.Time"),
    (Nullable, "time with time zone", "null.Time"),
    (Nullable, "timestamp with time zone", "null.Time"),
    // Element type is not inspected yet; every array maps to the same wrapper.
    (Nullable, "ARRAY", "pq.Int32Array"),
    (NotNull, "integer", "int"),
    (NotNull, "smallint", "int"),
    (NotNull, "real", "float64"),
    (NotNull, "numeric", "float64"),
    (NotNull, "double precision", "float64"),
    (NotNull, "text", "string"),
    (NotNull, "boolean", "bool"),
    (NotNull, "date", "time.Time"),
    (NotNull, "timestamp with time zone", "time.Time"),
    (NotNull, "time with time zone", "datatypes.Time"),
    (NotNull, "ARRAY", "pq.Int32Array"),
];

impl Nullability {
    /// Parses an `information_schema.columns.is_nullable` value.
    pub fn from_is_nullable(is_nullable: &str) -> Self {
        if is_nullable.eq_ignore_ascii_case("YES") {
            Nullable
        } else {
            NotNull
        }
    }

    pub fn is_nullable(self) -> bool {
        matches!(self, Nullable)
    }
}

impl From<bool> for Nullability {
    fn from(nullable: bool) -> Self {
        if nullable {
            Nullable
        } else {
            NotNull
        }
    }
}

impl TypeMap {
    /// An empty map, for callers that want to supply every entry themselves.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds or replaces an entry.
    pub fn insert(
        &mut self,
        nullability: Nullability,
        data_type: impl Into<String>,
        tag: impl Into<String>,
    ) -> Option<String> {
        self.entries
            .insert((nullability, data_type.into()), tag.into())
    }

    pub fn get(&self, nullability: Nullability, data_type: &str) -> Option<&str> {
        self.entries
            .get(&(nullability, data_type.to_string()))
            .map(String::as_str)
    }

    /// Resolves a catalog column into a [`Column`] carrying its semantic tag.
    pub fn resolve(
        &self,
        table: &str,
        column: &str,
        nullability: Nullability,
        data_type: &str,
    ) -> Result<Column> {
        match self.get(nullability, data_type) {
            Some(tag) => Ok(Column::new(column, tag)),
            None => Err(Error::unmapped_type(
                table,
                column,
                data_type,
                nullability.is_nullable(),
            )),
        }
    }

    /// Applies override entries from a JSON array of [`TypeMapEntry`].
    pub fn extend_from_json(&mut self, json: &str) -> Result<()> {
        let entries: Vec<TypeMapEntry> = serde_json::from_str(json)?;
        self.extend(entries);
        Ok(())
    }

    /// Loads the default map and applies the overrides stored at `path`.
    pub fn with_overrides_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|err| Error::from(err).context(format!("reading `{}`", path.display())))?;

        let mut map = Self::default();
        map.extend_from_json(&json)
            .map_err(|err| err.context(format!("parsing `{}`", path.display())))?;
        Ok(map)
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for (nullability, data_type, tag) in DEFAULT_TYPES {
            map.insert(*nullability, *data_type, *tag);
        }
        map
    }
}

impl Extend<TypeMapEntry> for TypeMap {
    fn extend<T: IntoIterator<Item = TypeMapEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry.nullable.into(), entry.data_type, entry.ty);
        }
    }
}
