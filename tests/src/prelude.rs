//! Common imports for test files
//!
//! `use tests::prelude::*;`

pub use crate::{field_pairs, model, names, FakeCatalog};

pub use schemagen_core::{
    describe,
    schema::{Association, AssociationKind, Column},
    DefaultNamer, Merger, Model, ModelFile, TypeMap,
};

pub use std_util::prelude::*;
