//! CLI commands

pub mod list;
pub mod run;

pub use run::RunArgs;
