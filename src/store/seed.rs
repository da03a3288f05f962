//! Seed sources: where `load_grades` fetches its initial collection from.
//!
//! There is no real backend; the default source parses a JSON document
//! embedded at compile time. The trait exists so tests can inject parse
//! failures or alternate fixtures.

use crate::error::SeedError;
use crate::grade::Grade;

/// A source of seed grade records.
///
/// Fetching is modeled as fallible even for the embedded document, so load
/// failure handling stays honest (see `InMemoryGradeStore::load_grades`).
pub trait SeedSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Grade>, SeedError>;
}

/// The default seed: the embedded `assets/grades.json` document.
#[derive(Debug, Clone, Default)]
pub struct StaticSeed;

/// Compiled-in seed document, schema: array of `{id, minPercentage,
/// symbolicGrade, descriptiveGrade?}`.
const GRADES_JSON: &str = include_str!("../../assets/grades.json");

impl SeedSource for StaticSeed {
    fn fetch(&self) -> Result<Vec<Grade>, SeedError> {
        serde_json::from_str(GRADES_JSON).map_err(|e| SeedError::Parse(e.to_string()))
    }
}

/// A seed holding an explicit in-memory document, for tests and demos.
#[derive(Debug, Clone)]
pub struct JsonSeed {
    document: String,
}

impl JsonSeed {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl SeedSource for JsonSeed {
    fn fetch(&self) -> Result<Vec<Grade>, SeedError> {
        serde_json::from_str(&self.document).map_err(|e| SeedError::Parse(e.to_string()))
    }
}
