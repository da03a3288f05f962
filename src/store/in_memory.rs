//! InMemoryGradeStore - watch-channel-backed grade collection with mock latency.

use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "emitter")]
use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;
use uuid::Uuid;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use super::seed::{SeedSource, StaticSeed};
use crate::error::GradeStoreError;
use crate::grade::{Grade, GradeInput};

/// Prefix of every store-assigned identifier.
pub const ID_PREFIX: &str = "ungr-";

/// Simulated round-trip latency, in milliseconds, applied to every async
/// read and write before it touches the collection.
pub const MOCK_DELAY_MS: u64 = 300;

/// An immutable point-in-time copy of the full grade collection.
pub type GradeSnapshot = Arc<Vec<Grade>>;

/// The authoritative in-memory grade collection.
///
/// The collection lives inside a `watch` channel: reading borrows the
/// current snapshot, subscribing yields the current snapshot immediately and
/// every one published after a mutation. Mutations check-and-apply inside
/// the channel's own critical section, so a failed check publishes nothing
/// and overlapping writes to the same record resolve last-write-wins by
/// completion time.
///
/// Clone-friendly; clones share the same collection and subscribers.
#[derive(Clone)]
pub struct InMemoryGradeStore {
    snapshot: watch::Sender<GradeSnapshot>,
    seed: Arc<dyn SeedSource>,
    #[cfg(feature = "emitter")]
    events: Arc<Mutex<EventEmitter>>,
}

impl Default for InMemoryGradeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGradeStore {
    /// Create an empty store seeded from the embedded grades document.
    pub fn new() -> Self {
        Self::with_seed(StaticSeed)
    }

    /// Create an empty store with a custom seed source.
    pub fn with_seed(seed: impl SeedSource + 'static) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            snapshot,
            seed: Arc::new(seed),
            #[cfg(feature = "emitter")]
            events: Arc::new(Mutex::new(EventEmitter::new())),
        }
    }

    /// (Re)populate the collection from the seed source, replacing the
    /// current snapshot wholesale. Idempotent. A failed fetch is logged and
    /// leaves the collection at its prior state.
    pub fn load_grades(&self) {
        match self.seed.fetch() {
            Ok(grades) => {
                self.snapshot.send_replace(Arc::new(grades));
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load grades, keeping previous collection");
            }
        }
    }

    /// The current snapshot, without latency; clones an `Arc`.
    pub fn grades(&self) -> GradeSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot updates. The receiver can borrow the current
    /// snapshot immediately and is woken for every subsequent publish.
    pub fn subscribe(&self) -> watch::Receiver<GradeSnapshot> {
        self.snapshot.subscribe()
    }

    /// Fetch the full collection, with simulated latency.
    pub async fn get_grades(&self) -> Result<Vec<Grade>, GradeStoreError> {
        Self::network_delay().await;
        Ok(self.snapshot.borrow().as_ref().clone())
    }

    /// Fetch a single record by identifier, with simulated latency.
    pub async fn get_grade_by_id(&self, id: &str) -> Result<Grade, GradeStoreError> {
        Self::network_delay().await;
        self.snapshot
            .borrow()
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| GradeStoreError::NotFound { id: id.to_string() })
    }

    /// Create a new grade.
    ///
    /// Fails with `Conflict` if any existing record already holds the input's
    /// `min_percentage`. On success the new record gets a fresh identifier,
    /// is appended to the collection, and the updated snapshot is published.
    pub async fn create_grade(&self, input: GradeInput) -> Result<Grade, GradeStoreError> {
        input.validate()?;
        Self::network_delay().await;

        let mut result = Err(GradeStoreError::Conflict {
            min_percentage: input.min_percentage,
        });
        self.snapshot.send_if_modified(|grades| {
            if grades
                .iter()
                .any(|g| g.min_percentage == input.min_percentage)
            {
                return false;
            }
            let grade = Grade::from_input(Self::generate_id(), input.clone());
            let mut next = grades.as_ref().clone();
            next.push(grade.clone());
            *grades = Arc::new(next);
            result = Ok(grade);
            true
        });

        match &result {
            Ok(grade) => self.emit_mutation("GradeCreated", &grade.id),
            Err(err) => tracing::debug!(error = %err, "create rejected"),
        }
        result
    }

    /// Replace the mutable fields of an existing grade, identity preserved.
    ///
    /// Fails with `NotFound` if the identifier is absent, or `Conflict` if
    /// any OTHER record holds the input's `min_percentage`. Keeping its own
    /// threshold is never a self-conflict.
    pub async fn update_grade(
        &self,
        id: &str,
        input: GradeInput,
    ) -> Result<Grade, GradeStoreError> {
        input.validate()?;
        Self::network_delay().await;

        let mut result = Err(GradeStoreError::NotFound { id: id.to_string() });
        self.snapshot.send_if_modified(|grades| {
            let Some(index) = grades.iter().position(|g| g.id == id) else {
                return false;
            };
            if grades
                .iter()
                .any(|g| g.id != id && g.min_percentage == input.min_percentage)
            {
                result = Err(GradeStoreError::Conflict {
                    min_percentage: input.min_percentage,
                });
                return false;
            }
            let mut next = grades.as_ref().clone();
            next[index].apply_input(input.clone());
            result = Ok(next[index].clone());
            *grades = Arc::new(next);
            true
        });

        match &result {
            Ok(grade) => self.emit_mutation("GradeUpdated", &grade.id),
            Err(err) => tracing::debug!(error = %err, "update rejected"),
        }
        result
    }

    /// Remove a grade. Fails with `NotFound` if the identifier is absent.
    pub async fn delete_grade(&self, id: &str) -> Result<(), GradeStoreError> {
        Self::network_delay().await;

        let mut result = Err(GradeStoreError::NotFound { id: id.to_string() });
        self.snapshot.send_if_modified(|grades| {
            let Some(index) = grades.iter().position(|g| g.id == id) else {
                return false;
            };
            let mut next = grades.as_ref().clone();
            next.remove(index);
            *grades = Arc::new(next);
            result = Ok(());
            true
        });

        match &result {
            Ok(()) => self.emit_mutation("GradeDeleted", id),
            Err(err) => tracing::debug!(error = %err, "delete rejected"),
        }
        result
    }

    /// Register a listener for a mutation event (`"GradeCreated"`,
    /// `"GradeUpdated"`, `"GradeDeleted"`). The payload is the record id.
    /// Returns the listener id assigned by the emitter.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, event: &str, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.events().on(event, listener)
    }

    /// Remove a previously registered listener by id.
    #[cfg(feature = "emitter")]
    pub fn remove_listener(&self, listener_id: &str) -> Option<String> {
        self.events().remove_listener(listener_id)
    }

    #[cfg(feature = "emitter")]
    fn events(&self) -> MutexGuard<'_, EventEmitter> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(feature = "emitter")]
    fn emit_mutation(&self, event: &str, grade_id: &str) {
        self.events().emit(event, grade_id.to_string());
    }

    #[cfg(not(feature = "emitter"))]
    fn emit_mutation(&self, _event: &str, _grade_id: &str) {}

    async fn network_delay() {
        tokio::time::sleep(Duration::from_millis(MOCK_DELAY_MS)).await;
    }

    /// Fixed prefix plus 8 lowercase hex characters. Collisions are
    /// negligible and not checked.
    fn generate_id() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("{}{}", ID_PREFIX, &hex[..8])
    }
}
