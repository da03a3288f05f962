mod autosave;
mod error;
mod grade;
mod ranges;
mod store;

pub use autosave::{AutoSave, AUTO_SAVE_DEBOUNCE_MS};
pub use error::{
    ErrorBody, ErrorResponse, GradeStoreError, SeedError, CONFLICT_ERROR_CODE,
    CONFLICT_ERROR_MESSAGE,
};
pub use grade::{Grade, GradeInput, GradeWithRange, InvalidGrade, MIN_SYMBOLIC_GRADE_LENGTH};
pub use ranges::{compute_ranges, max_for_candidate, suggested_min_percentage, SUGGESTION_STEP};
pub use store::{
    GradeSnapshot, InMemoryGradeStore, JsonSeed, SeedSource, StaticSeed, ID_PREFIX, MOCK_DELAY_MS,
};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
