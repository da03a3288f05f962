//! Grade records and the input shape accepted by save operations.
//!
//! A `Grade` is a persisted record with a store-assigned identifier. Callers
//! never supply a `max_percentage`; band maxima are always derived from the
//! neighboring minimums (see [`crate::ranges`]).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum length accepted for a symbolic grade ("A+", "B", ...).
pub const MIN_SYMBOLIC_GRADE_LENGTH: usize = 2;

/// Input to a create or update operation.
///
/// Carries everything a `Grade` holds except the identifier, which the store
/// assigns. `min_percentage` is the threshold where the band begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeInput {
    pub min_percentage: u8,
    pub symbolic_grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptive_grade: Option<String>,
}

impl GradeInput {
    /// Check the field constraints: threshold within 0–100, symbolic grade
    /// at least [`MIN_SYMBOLIC_GRADE_LENGTH`] characters.
    pub fn validate(&self) -> Result<(), InvalidGrade> {
        if self.min_percentage > 100 {
            return Err(InvalidGrade::PercentageOutOfRange(self.min_percentage));
        }
        if self.symbolic_grade.chars().count() < MIN_SYMBOLIC_GRADE_LENGTH {
            return Err(InvalidGrade::SymbolicGradeTooShort);
        }
        Ok(())
    }
}

/// A persisted grade record.
///
/// `id` is the only caller-independent identity; it is assigned once by the
/// store and never changes across updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: String,
    pub min_percentage: u8,
    pub symbolic_grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptive_grade: Option<String>,
}

impl Grade {
    /// Build a record from an input and a freshly assigned identifier.
    pub fn from_input(id: impl Into<String>, input: GradeInput) -> Self {
        Self {
            id: id.into(),
            min_percentage: input.min_percentage,
            symbolic_grade: input.symbolic_grade,
            descriptive_grade: input.descriptive_grade,
        }
    }

    /// Replace the mutable fields from an input, keeping the identity.
    pub fn apply_input(&mut self, input: GradeInput) {
        self.min_percentage = input.min_percentage;
        self.symbolic_grade = input.symbolic_grade;
        self.descriptive_grade = input.descriptive_grade;
    }
}

/// A grade augmented with its derived band maximum.
///
/// Transient: recomputed on every read of the collection, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeWithRange {
    #[serde(flatten)]
    pub grade: Grade,
    pub max_percentage: u8,
}

/// A field constraint violation on a [`GradeInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGrade {
    PercentageOutOfRange(u8),
    SymbolicGradeTooShort,
}

impl fmt::Display for InvalidGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGrade::PercentageOutOfRange(value) => {
                write!(f, "minimum percentage {} is outside 0-100", value)
            }
            InvalidGrade::SymbolicGradeTooShort => write!(
                f,
                "symbolic grade must be at least {} characters",
                MIN_SYMBOLIC_GRADE_LENGTH
            ),
        }
    }
}

impl std::error::Error for InvalidGrade {}
