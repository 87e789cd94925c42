//! Word casing and inflection.
//!
//! Casing is delegated to `heck`; singular/plural inflection to
//! `pluralizer`, which follows the same rule set as the common JavaScript
//! `pluralize` package (irregulars, uncountables, case restoration).

use heck::ToUpperCamelCase;

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

pub fn singularize(src: &str) -> String {
    if src.is_empty() {
        return String::new();
    }
    pluralizer::pluralize(src, 1, false)
}

pub fn pluralize(src: &str) -> String {
    if src.is_empty() {
        return String::new();
    }
    pluralizer::pluralize(src, 2, false)
}
