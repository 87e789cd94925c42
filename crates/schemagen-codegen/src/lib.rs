//! Declaration emission.
//!
//! Each model of the intermediate description is merged into a field list,
//! expanded into a small syntax tree and printed as one source file named
//! after the model's singular form.

pub mod ast;

mod config;
pub use config::Config;

mod expand;

mod generate;
pub use generate::{Failed, Generator, Report, Unit, Written};

mod imports;

mod print;
