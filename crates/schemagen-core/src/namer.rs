use std_util::str;

/// Naming heuristics shared by classification and merging.
///
/// Relationship deduplication depends entirely on these comparisons, so
/// they are kept behind one trait that callers can swap out.
pub trait Namer {
    fn singularize(&self, word: &str) -> String;

    fn pluralize(&self, word: &str) -> String;

    /// Cases a raw catalog name to the declaration identifier convention.
    fn to_identifier_case(&self, word: &str) -> String;

    /// Field name for a direct column. A trailing `Id` token becomes `ID`.
    fn field_name(&self, column: &str) -> String {
        let name = self.to_identifier_case(column);
        match name.strip_suffix("Id") {
            Some(stem) => format!("{stem}ID"),
            None => name,
        }
    }

    /// Declaration name for a table: singular, identifier-cased.
    fn type_name(&self, table: &str) -> String {
        self.to_identifier_case(&self.singularize(table))
    }
}

/// English inflection with upper camel case identifiers (`item_states` →
/// `ItemState`).
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNamer;

impl Namer for DefaultNamer {
    fn singularize(&self, word: &str) -> String {
        str::singularize(word)
    }

    fn pluralize(&self, word: &str) -> String {
        str::pluralize(word)
    }

    fn to_identifier_case(&self, word: &str) -> String {
        str::upper_camel_case(word)
    }
}

impl<T: Namer + ?Sized> Namer for &T {
    fn singularize(&self, word: &str) -> String {
        (**self).singularize(word)
    }

    fn pluralize(&self, word: &str) -> String {
        (**self).pluralize(word)
    }

    fn to_identifier_case(&self, word: &str) -> String {
        (**self).to_identifier_case(word)
    }

    fn field_name(&self, column: &str) -> String {
        (**self).field_name(column)
    }

    fn type_name(&self, table: &str) -> String {
        (**self).type_name(table)
    }
}
