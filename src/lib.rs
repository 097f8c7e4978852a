//! Doctor-patient transcript analysis: entities, summary, keywords,
//! sentiment/intent, and SOAP notes.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nlp;

pub use error::{AnalysisError, Result};
pub use nlp::Pipeline;
