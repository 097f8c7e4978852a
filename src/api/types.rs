//! Request and response DTOs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub transcript: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub version: &'static str,
    pub lexicon_entries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
