use super::traits::{Observer, ObserverEvent};
use tracing::{info, warn};

/// Log-based observer: uses tracing, zero external deps
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for LogObserver {
    fn record_event(&self, event: &ObserverEvent) {
        match event {
            ObserverEvent::SelectionRecorded {
                liked,
                disliked,
                rounds,
            } => {
                info!(liked, disliked, rounds, "training.select");
            }
            ObserverEvent::MatchesRanked { order, returned } => {
                info!(order = %order, returned, "training.best_matches");
            }
            ObserverEvent::CandidatesProposed {
                requested,
                window,
                returned,
            } => {
                info!(requested, window, returned, "training.candidates");
            }
            ObserverEvent::DiscriminationMeasured { top, level } => {
                info!(top, level, "training.discrimination");
            }
            ObserverEvent::SessionRestored { tags, skipped } => {
                info!(tags, skipped, "training.restore");
            }
            ObserverEvent::Error { component, message } => {
                warn!(component = %component, error = %message, "error");
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}
