//! Error taxonomy for grade store operations, plus the HTTP-analogous wire
//! shape surfaced to callers.
//!
//! Every error here is terminal for the operation that raised it; the store
//! never retries on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grade::InvalidGrade;

/// Machine-readable code attached to duplicate-threshold conflicts.
pub const CONFLICT_ERROR_CODE: &str = "AS014";
/// Human-readable message attached to duplicate-threshold conflicts.
pub const CONFLICT_ERROR_MESSAGE: &str = "Minimum percentage value is already used!";

/// Failure of a grade store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeStoreError {
    /// The referenced identifier is absent from the collection.
    NotFound { id: String },
    /// The write would leave two records sharing the same threshold.
    Conflict { min_percentage: u8 },
    /// The input failed field validation before any mutation was attempted.
    Invalid(InvalidGrade),
    /// The seed document could not be fetched or parsed.
    Seed(SeedError),
}

impl GradeStoreError {
    /// HTTP-analogous status for this error.
    pub fn status(&self) -> u16 {
        match self {
            GradeStoreError::NotFound { .. } => 404,
            GradeStoreError::Conflict { .. } => 409,
            GradeStoreError::Invalid(_) => 422,
            GradeStoreError::Seed(_) => 502,
        }
    }

    /// Whether this is a duplicate-threshold conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, GradeStoreError::Conflict { .. })
    }
}

impl fmt::Display for GradeStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeStoreError::NotFound { id } => write!(f, "grade {} not found", id),
            GradeStoreError::Conflict { min_percentage } => {
                write!(f, "minimum percentage {} is already used", min_percentage)
            }
            GradeStoreError::Invalid(invalid) => write!(f, "invalid grade: {}", invalid),
            GradeStoreError::Seed(err) => write!(f, "seed load failed: {}", err),
        }
    }
}

impl std::error::Error for GradeStoreError {}

impl From<InvalidGrade> for GradeStoreError {
    fn from(err: InvalidGrade) -> Self {
        GradeStoreError::Invalid(err)
    }
}

impl From<SeedError> for GradeStoreError {
    fn from(err: SeedError) -> Self {
        GradeStoreError::Seed(err)
    }
}

/// Failure while fetching or parsing the seed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    Fetch(String),
    Parse(String),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Fetch(message) => write!(f, "fetch: {}", message),
            SeedError::Parse(message) => write!(f, "parse: {}", message),
        }
    }
}

impl std::error::Error for SeedError {}

/// The serialized error shape callers see: `{status, error: {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: ErrorBody,
}

/// Body of an [`ErrorResponse`]; absent fields are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&GradeStoreError> for ErrorResponse {
    fn from(err: &GradeStoreError) -> Self {
        let error = match err {
            GradeStoreError::NotFound { .. } => ErrorBody {
                message: Some("Grade not found".to_string()),
                ..ErrorBody::default()
            },
            GradeStoreError::Conflict { .. } => ErrorBody {
                error_code: Some(CONFLICT_ERROR_CODE.to_string()),
                error_message: Some(CONFLICT_ERROR_MESSAGE.to_string()),
                ..ErrorBody::default()
            },
            GradeStoreError::Invalid(invalid) => ErrorBody {
                message: Some(invalid.to_string()),
                ..ErrorBody::default()
            },
            GradeStoreError::Seed(seed) => ErrorBody {
                message: Some(seed.to_string()),
                ..ErrorBody::default()
            },
        };
        ErrorResponse {
            status: err.status(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_409_with_code() {
        let err = GradeStoreError::Conflict { min_percentage: 90 };
        let resp = ErrorResponse::from(&err);
        assert_eq!(resp.status, 409);
        assert_eq!(resp.error.error_code.as_deref(), Some(CONFLICT_ERROR_CODE));
        assert_eq!(
            resp.error.error_message.as_deref(),
            Some(CONFLICT_ERROR_MESSAGE)
        );
        assert_eq!(resp.error.message, None);
    }

    #[test]
    fn not_found_maps_to_404_with_message() {
        let err = GradeStoreError::NotFound {
            id: "nonexistent-id".into(),
        };
        let resp = ErrorResponse::from(&err);
        assert_eq!(resp.status, 404);
        assert_eq!(resp.error.message.as_deref(), Some("Grade not found"));
        assert_eq!(resp.error.error_code, None);
    }

    #[test]
    fn wire_shape_omits_absent_fields() {
        let err = GradeStoreError::Conflict { min_percentage: 80 };
        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(json["status"], 409);
        assert_eq!(json["error"]["errorCode"], "AS014");
        assert!(json["error"].get("message").is_none());
    }
}
