//! The relational description shared by introspection and generation.
//!
//! A [`Model`] is one base table: its direct [`Column`]s plus the
//! [`Association`]s inferred from foreign-key constraints. The collection of
//! models is persisted as a [`ModelFile`], which operators may hand-edit
//! between runs.

mod association;
pub use association::{Association, AssociationKind};

mod column;
pub use column::Column;

mod file;
pub use file::ModelFile;

mod model;
pub use model::Model;
