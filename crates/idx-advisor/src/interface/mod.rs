//! Presentation layer for the CLI

pub mod formatter;

pub use formatter::CliFormatter;
