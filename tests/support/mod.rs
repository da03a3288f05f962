//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use gradebands::{Grade, GradeInput, InMemoryGradeStore, JsonSeed, SeedError, SeedSource};

/// The three-band seed used across tests: 90/A+, 80/A, 70/B+.
pub fn seed_grades() -> Vec<Grade> {
    vec![
        grade("ungr-12345678", 90, "A+", Some("Excellent")),
        grade("ungr-87654321", 80, "A", Some("Very Good")),
        grade("ungr-11111111", 70, "B+", Some("Good")),
    ]
}

pub fn grade(id: &str, min: u8, symbolic: &str, descriptive: Option<&str>) -> Grade {
    Grade {
        id: id.to_string(),
        min_percentage: min,
        symbolic_grade: symbolic.to_string(),
        descriptive_grade: descriptive.map(str::to_string),
    }
}

pub fn input(min: u8, symbolic: &str) -> GradeInput {
    GradeInput {
        min_percentage: min,
        symbolic_grade: symbolic.to_string(),
        descriptive_grade: None,
    }
}

/// A store loaded with [`seed_grades`].
pub fn seeded_store() -> InMemoryGradeStore {
    let document = serde_json::to_string(&seed_grades()).unwrap();
    let store = InMemoryGradeStore::with_seed(JsonSeed::new(document));
    store.load_grades();
    store
}

/// A seed source that always fails, for load-failure tests.
pub struct BrokenSeed;

impl SeedSource for BrokenSeed {
    fn fetch(&self) -> Result<Vec<Grade>, SeedError> {
        Err(SeedError::Fetch("connection refused".to_string()))
    }
}
