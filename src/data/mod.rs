//! Bundled reference data.

pub mod vocabulary;
