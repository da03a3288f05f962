//! Grade store: the authoritative in-memory grade collection.
//!
//! The store owns the only mutable copy of the collection and publishes an
//! immutable snapshot after every successful mutation. Reads and writes are
//! async and suspend for a fixed simulated latency, standing in for the
//! network round-trip of a real backend.
//!
//! ## Example
//!
//! ```ignore
//! use gradebands::{GradeInput, InMemoryGradeStore};
//!
//! let store = InMemoryGradeStore::new();
//! store.load_grades();
//!
//! let created = store
//!     .create_grade(GradeInput {
//!         min_percentage: 60,
//!         symbolic_grade: "C+".into(),
//!         descriptive_grade: None,
//!     })
//!     .await?;
//!
//! let mut updates = store.subscribe();
//! let snapshot = updates.borrow().clone();
//! ```

mod in_memory;
mod seed;

pub use in_memory::{GradeSnapshot, InMemoryGradeStore, ID_PREFIX, MOCK_DELAY_MS};
pub use seed::{JsonSeed, SeedSource, StaticSeed};
