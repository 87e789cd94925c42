use crate::ast::Import;
use schemagen_core::{FieldType, MergedField};

/// Substring markers and the import each one requires.
const IMPORT_MARKERS: &[(&str, &str)] = &[
    ("time", "time"),
    ("null", "gopkg.in/guregu/null.v4"),
    ("datatypes", "gorm.io/datatypes"),
    ("pq", "github.com/lib/pq"),
];

/// Returns the imports implied by `fields`, sorted by path.
///
/// Only column type tags are scanned; association members reference
/// declarations of the same package. A tag mentioning a marker anywhere
/// pulls the import in.
pub fn detect(fields: &[MergedField]) -> Vec<Import> {
    let tags: Vec<&str> = fields
        .iter()
        .filter_map(|field| match &field.ty {
            FieldType::Scalar(tag) => Some(tag.as_str()),
            _ => None,
        })
        .collect();

    let mut imports: Vec<_> = IMPORT_MARKERS
        .iter()
        .filter(|(marker, _)| tags.iter().any(|tag| tag.contains(marker)))
        .map(|(_, path)| Import::new(*path))
        .collect();

    imports.sort();
    imports
}
