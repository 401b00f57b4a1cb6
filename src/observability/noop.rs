use super::traits::{Observer, ObserverEvent};

/// Zero-overhead observer: all methods compile to nothing
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline(always)]
    fn record_event(&self, _event: &ObserverEvent) {}

    fn name(&self) -> &str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_name() {
        assert_eq!(NoopObserver.name(), "noop");
    }

    #[test]
    fn noop_record_event_does_not_panic() {
        let obs = NoopObserver;
        obs.record_event(&ObserverEvent::SelectionRecorded {
            liked: 1,
            disliked: 1,
            rounds: 1,
        });
        obs.record_event(&ObserverEvent::Error {
            component: "catalog".into(),
            message: "missing".into(),
        });
        obs.flush();
    }
}
