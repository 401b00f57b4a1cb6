use super::candidates::{self, DEFAULT_MIN_CANDIDATES};
use super::catalog::Catalog;
use super::counters::TagCounterStore;
use super::discrimination;
use super::points::best_tag_points;
use super::scorer::{RankOrder, rank};
use super::store::Snapshot;
use super::types::{ACCEPT_ALL, Entity, EntityScore, TagCounters, TagPoints, Verdict};
use crate::error::TrainingError;
use crate::observability::{NoopObserver, Observer, ObserverEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Seed used for candidate sampling when the caller supplies none.
pub const DEFAULT_SEED: u64 = 1;

/// A training session: the catalog, the tag counters learned from user
/// feedback, and the queries built on top of them.
///
/// The counter store is the only mutable state and only [`select`] changes
/// it. Every query recomputes tag points from the current counters.
///
/// [`select`]: TrainingSession::select
pub struct TrainingSession {
    catalog: Catalog,
    counters: TagCounterStore,
    rounds: u64,
    default_seed: u64,
    min_candidates: usize,
    observer: Arc<dyn Observer>,
}

impl fmt::Debug for TrainingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainingSession")
            .field("entities", &self.catalog.len())
            .field("tags", &self.counters.len())
            .field("rounds", &self.rounds)
            .field("default_seed", &self.default_seed)
            .field("min_candidates", &self.min_candidates)
            .field("observer", &self.observer.name())
            .finish()
    }
}

impl TrainingSession {
    pub fn new(entities: impl IntoIterator<Item = Entity>) -> Self {
        Self::with_seed(entities, DEFAULT_SEED)
    }

    pub fn with_seed(entities: impl IntoIterator<Item = Entity>, seed: u64) -> Self {
        let catalog = Catalog::new(entities);
        let counters = TagCounterStore::for_catalog(&catalog);
        info!(
            entities = catalog.len(),
            tags = counters.len(),
            "training session created"
        );
        Self {
            catalog,
            counters,
            rounds: 0,
            default_seed: seed,
            min_candidates: DEFAULT_MIN_CANDIDATES,
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_min_candidates(mut self, min_candidates: usize) -> Self {
        self.min_candidates = min_candidates;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn counters(&self) -> &TagCounters {
        self.counters.as_map()
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn default_seed(&self) -> u64 {
        self.default_seed
    }

    pub fn min_candidates(&self) -> usize {
        self.min_candidates
    }

    /// Record user feedback: every tag of a liked entity gains one, every tag
    /// of a disliked entity loses one.
    ///
    /// All names are checked before any counter moves, so a `NotFound` error
    /// leaves the session untouched. Naming an entity on both sides cancels
    /// out.
    pub fn select<S: AsRef<str>>(
        &mut self,
        liked: &[S],
        disliked: &[S],
    ) -> Result<(), TrainingError> {
        let (liked, disliked) = match (self.resolve(liked), self.resolve(disliked)) {
            (Ok(liked), Ok(disliked)) => (liked, disliked),
            (Err(e), _) | (_, Err(e)) => {
                self.observer.record_event(&ObserverEvent::Error {
                    component: "training".into(),
                    message: e.to_string(),
                });
                return Err(e);
            }
        };

        for entity in &liked {
            self.counters.apply(&entity.tags, Verdict::Liked);
        }
        for entity in &disliked {
            self.counters.apply(&entity.tags, Verdict::Disliked);
        }
        self.rounds += 1;

        debug!(
            liked = liked.len(),
            disliked = disliked.len(),
            rounds = self.rounds,
            "selection recorded"
        );
        self.observer.record_event(&ObserverEvent::SelectionRecorded {
            liked: liked.len(),
            disliked: disliked.len(),
            rounds: self.rounds,
        });
        Ok(())
    }

    fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Entity>, TrainingError> {
        names
            .iter()
            .map(|name| {
                self.catalog
                    .get(name.as_ref())
                    .cloned()
                    .ok_or_else(|| TrainingError::NotFound {
                        name: name.as_ref().to_owned(),
                    })
            })
            .collect()
    }

    /// Rank-normalized points for the current counters.
    pub fn tag_points(&self) -> TagPoints {
        best_tag_points(self.counters.as_map())
    }

    /// Entities scoring at least `min_score`, best first.
    pub fn best_matches(&self, min_score: i64) -> Vec<EntityScore> {
        self.ranked(min_score, RankOrder::Descending)
    }

    /// Same scoring as [`best_matches`](Self::best_matches) with a caller-chosen direction.
    pub fn ranked(&self, min_score: i64, order: RankOrder) -> Vec<EntityScore> {
        let ranking = rank(self.catalog.iter(), &self.tag_points(), min_score, order);
        self.observer.record_event(&ObserverEvent::MatchesRanked {
            order,
            returned: ranking.len(),
        });
        ranking
    }

    /// Candidates to show next, sampled with a generator seeded from `seed`
    /// or the session default.
    pub fn next_candidates(
        &self,
        quantity: usize,
        window: usize,
        seed: Option<u64>,
    ) -> Result<Vec<Entity>, TrainingError> {
        let mut rng = StdRng::seed_from_u64(seed.unwrap_or(self.default_seed));
        self.next_candidates_with_rng(quantity, window, &mut rng)
    }

    pub fn next_candidates_with_rng<R: Rng + ?Sized>(
        &self,
        quantity: usize,
        window: usize,
        rng: &mut R,
    ) -> Result<Vec<Entity>, TrainingError> {
        let picked = candidates::next_candidates(
            &self.catalog,
            &self.counters,
            quantity,
            window,
            self.min_candidates,
            rng,
        )?;
        self.observer.record_event(&ObserverEvent::CandidatesProposed {
            requested: quantity,
            window,
            returned: picked.len(),
        });
        Ok(picked)
    }

    /// How far the top `k` best matches stand apart from the rest.
    pub fn discrimination_level(&self, k: usize) -> Result<i64, TrainingError> {
        let ranking = rank(
            self.catalog.iter(),
            &self.tag_points(),
            ACCEPT_ALL,
            RankOrder::Descending,
        );
        let level = discrimination::discrimination_level(&ranking, k)?;
        self.observer
            .record_event(&ObserverEvent::DiscriminationMeasured { top: k, level });
        Ok(level)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.counters.as_map().clone(), self.rounds)
    }

    /// Load counters saved from an earlier session against this catalog.
    /// Returns how many saved tags were unknown and skipped.
    pub fn restore(&mut self, snapshot: &Snapshot) -> usize {
        let skipped = self.counters.restore(&snapshot.counters);
        self.rounds = snapshot.rounds;
        self.observer.record_event(&ObserverEvent::SessionRestored {
            tags: snapshot.counters.len(),
            skipped,
        });
        skipped
    }

    pub fn reset(&mut self) {
        self.counters.reset();
        self.rounds = 0;
        info!("training session reset");
    }
}

/// Lock-guarded handle for sharing one session between threads. Every
/// operation holds the lock for its whole duration, reads included.
#[derive(Debug, Clone)]
pub struct SharedTrainingSession {
    inner: Arc<Mutex<TrainingSession>>,
}

impl SharedTrainingSession {
    pub fn new(session: TrainingSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TrainingSession>, TrainingError> {
        self.inner
            .lock()
            .map_err(|e| TrainingError::LockPoisoned(e.to_string()))
    }

    pub fn select<S: AsRef<str>>(&self, liked: &[S], disliked: &[S]) -> Result<(), TrainingError> {
        self.lock()?.select(liked, disliked)
    }

    pub fn best_matches(&self, min_score: i64) -> Result<Vec<EntityScore>, TrainingError> {
        Ok(self.lock()?.best_matches(min_score))
    }

    pub fn next_candidates(
        &self,
        quantity: usize,
        window: usize,
        seed: Option<u64>,
    ) -> Result<Vec<Entity>, TrainingError> {
        self.lock()?.next_candidates(quantity, window, seed)
    }

    pub fn discrimination_level(&self, k: usize) -> Result<i64, TrainingError> {
        self.lock()?.discrimination_level(k)
    }

    pub fn snapshot(&self) -> Result<Snapshot, TrainingError> {
        Ok(self.lock()?.snapshot())
    }

    pub fn counters(&self) -> Result<TagCounters, TrainingError> {
        Ok(self.lock()?.counters().clone())
    }
}
