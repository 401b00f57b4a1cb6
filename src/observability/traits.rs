use crate::core::training::RankOrder;

/// Events a training session reports to its observer
#[derive(Debug, Clone)]
pub enum ObserverEvent {
    SelectionRecorded {
        liked: usize,
        disliked: usize,
        rounds: u64,
    },
    MatchesRanked {
        order: RankOrder,
        returned: usize,
    },
    CandidatesProposed {
        requested: usize,
        window: usize,
        returned: usize,
    },
    DiscriminationMeasured {
        top: usize,
        level: i64,
    },
    SessionRestored {
        tags: usize,
        skipped: usize,
    },
    Error {
        component: String,
        message: String,
    },
}

/// Core observability trait: implement for any backend
pub trait Observer: Send + Sync {
    /// Record a discrete event
    fn record_event(&self, event: &ObserverEvent);

    /// Flush any buffered data (no-op for most backends)
    fn flush(&self) {}

    /// Human-readable name of this observer
    fn name(&self) -> &str;
}
