mod assemble;
pub use assemble::{assemble, describe, Description};

pub mod catalog;
pub use catalog::Catalog;

mod error;
pub use error::{Error, IntoError};

mod introspect;
pub use introspect::{Introspection, Introspector};

pub mod merge;
pub use merge::{FieldType, MergedField, Merger};

mod namer;
pub use namer::{DefaultNamer, Namer};

pub mod relation;
pub use relation::Classifier;

pub mod schema;
pub use schema::{Model, ModelFile};

mod type_map;
pub use type_map::{Nullability, TypeMap, TypeMapEntry};

/// A Result type alias that uses [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
