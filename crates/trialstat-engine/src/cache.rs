//! Per-study memoization of generation runs.
//!
//! Lifecycle: `new → get_or_compute* → clear → drop`. The cache is an
//! ordinary value owned by its caller, not a process-wide singleton; tests
//! build their own.
//!
//! Each study id owns a slot. The slot's writer lock makes its holder the
//! only generator for that study, so concurrent requests for the same study
//! wait for the in-flight run instead of starting another one, while
//! different studies generate in parallel. The finished snapshot sits behind
//! a separate `RwLock` that is only held to copy an `Arc` in or out, so
//! readers never wait on a generation run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use trialstat_studies::{Study, get_study};

use crate::config::{CachePolicy, EngineConfig};
use crate::error::EngineError;
use crate::pipeline::{StudySnapshot, compute_study};

#[derive(Default)]
struct Slot {
    writer: Mutex<()>,
    stored: RwLock<Option<Arc<StudySnapshot>>>,
}

impl Slot {
    fn get(&self) -> Option<Arc<StudySnapshot>> {
        read(&self.stored).clone()
    }

    fn set(&self, snapshot: Arc<StudySnapshot>) {
        *write(&self.stored) = Some(snapshot);
    }
}

pub struct GenerationCache {
    config: EngineConfig,
    slots: Mutex<HashMap<String, Arc<Slot>>>,
    runs: AtomicUsize,
}

impl GenerationCache {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            slots: Mutex::new(HashMap::new()),
            runs: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The cached entry point: applies the configured [`CachePolicy`].
    pub fn get_study_metrics(&self, study_id: &str) -> Result<Arc<StudySnapshot>, EngineError> {
        match self.config.cache_policy {
            CachePolicy::Memoize => self.get_or_compute(study_id),
            CachePolicy::AlwaysRecompute => self.recompute(study_id),
        }
    }

    /// Return the stored snapshot for `study_id`, generating it on first use.
    ///
    /// Unknown study ids fail before any slot is created.
    pub fn get_or_compute(&self, study_id: &str) -> Result<Arc<StudySnapshot>, EngineError> {
        let study = get_study(study_id)?;
        let slot = self.slot(study_id);

        if let Some(snapshot) = slot.get() {
            debug!(study_id, "cache hit");
            return Ok(snapshot);
        }

        let _writer = lock(&slot.writer);
        // Another caller may have finished the run while we waited.
        if let Some(snapshot) = slot.get() {
            debug!(study_id, "cache hit after wait");
            return Ok(snapshot);
        }

        debug!(study_id, "cache miss");
        let snapshot = self.run(study.as_ref())?;
        slot.set(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Regenerate `study_id` unconditionally and replace the stored snapshot.
    /// The previous snapshot stays readable until the new one is stored.
    pub fn recompute(&self, study_id: &str) -> Result<Arc<StudySnapshot>, EngineError> {
        let study = get_study(study_id)?;
        let slot = self.slot(study_id);
        let _writer = lock(&slot.writer);

        debug!(study_id, "forced recompute");
        let snapshot = self.run(study.as_ref())?;
        slot.set(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Evict every entry. Runs already in flight finish but are not stored.
    pub fn clear(&self) {
        let mut slots = lock(&self.slots);
        debug!(entries = slots.len(), "clearing generation cache");
        slots.clear();
    }

    /// Whether a finished snapshot is stored for `study_id`.
    pub fn contains(&self, study_id: &str) -> bool {
        let slot = lock(&self.slots).get(study_id).cloned();
        slot.is_some_and(|slot| slot.get().is_some())
    }

    /// Number of studies with a finished snapshot.
    pub fn len(&self) -> usize {
        let slots: Vec<Arc<Slot>> = lock(&self.slots).values().cloned().collect();
        slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total generation runs performed by this cache.
    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::Relaxed)
    }

    fn slot(&self, study_id: &str) -> Arc<Slot> {
        let mut slots = lock(&self.slots);
        Arc::clone(slots.entry(study_id.to_string()).or_default())
    }

    fn run(&self, study: &dyn Study) -> Result<Arc<StudySnapshot>, EngineError> {
        let mut rng = self.config.rng.rng();
        let snapshot = compute_study(study, self.config.today(), &mut rng)?;
        self.runs.fetch_add(1, Ordering::Relaxed);
        Ok(Arc::new(snapshot))
    }
}

impl Default for GenerationCache {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

// A panic mid-generation leaves the slot's previous value intact, so a
// poisoned lock is still safe to use.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(rw: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    rw.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(rw: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    rw.write().unwrap_or_else(PoisonError::into_inner)
}
