use chrono::{DateTime, Utc};
use serde::Serialize;

/// Name recorded as the producer of an extraction
pub const EXTRACTOR_NAME: &str = "polycure";

/// Provenance wrapper around an extracted experiment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionEnvelope<T> {
    /// Producer name
    pub extractor: String,
    /// Producer version
    pub version: String,
    /// When the extraction ran
    pub extracted_at: DateTime<Utc>,
    /// Extracted tree
    pub content: T,
}

impl<T> ExtractionEnvelope<T> {
    /// Wrap content, stamped with the current time
    pub fn new(content: T) -> Self {
        Self::at(content, Utc::now())
    }

    /// Wrap content with an explicit timestamp
    pub fn at(content: T, extracted_at: DateTime<Utc>) -> Self {
        Self {
            extractor: EXTRACTOR_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            extracted_at,
            content,
        }
    }
}
