//! Triple-S to SPSS transpiler CLI library.

pub mod cli;
pub mod convert;
pub mod logging;
pub mod summary;
pub mod types;
