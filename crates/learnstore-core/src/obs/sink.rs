//! Metrics sink boundary.
//!
//! Identifier and catalogue logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! This module is the only allowed bridge between library logic
//! and the thread-local metrics state.
use crate::obs::metrics;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = const { RefCell::new(None) };
}

///
/// IssueKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IssueKind {
    Real,
    Temporary,
    Placeholder,
}

///
/// CatalogNamespace
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogNamespace {
    ItemType,
    View,
    Right,
    Enum,
    Property,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    IdentifierIssued {
        kind: IssueKind,
        item_type: Option<&'static str>,
    },
    NarrowAccepted {
        item_type: &'static str,
    },
    NarrowRejected {
        expected: &'static str,
    },
    CatalogLookup {
        namespace: CatalogNamespace,
        hit: bool,
    },
    CatalogBuilt {
        item_types: u64,
        views: u64,
        rights: u64,
        enums: u64,
    },
    ValidationFailed {
        errors: u64,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into the metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::IdentifierIssued { kind, item_type } => {
                metrics::with_state_mut(|m| {
                    match kind {
                        IssueKind::Real => m.ops.ids_issued = m.ops.ids_issued.saturating_add(1),
                        IssueKind::Temporary => {
                            m.ops.temporary_ids_issued =
                                m.ops.temporary_ids_issued.saturating_add(1);
                        }
                        IssueKind::Placeholder => {
                            m.ops.placeholder_ids_issued =
                                m.ops.placeholder_ids_issued.saturating_add(1);
                        }
                    }

                    if let Some(item_type) = item_type {
                        let entry = m.kinds.entry(item_type.to_string()).or_default();
                        entry.ids_issued = entry.ids_issued.saturating_add(1);
                    }
                });
            }

            MetricsEvent::NarrowAccepted { item_type } => {
                metrics::with_state_mut(|m| {
                    m.ops.narrow_accepted = m.ops.narrow_accepted.saturating_add(1);
                    let entry = m.kinds.entry(item_type.to_string()).or_default();
                    entry.narrow_accepted = entry.narrow_accepted.saturating_add(1);
                });
            }

            MetricsEvent::NarrowRejected { expected } => {
                metrics::with_state_mut(|m| {
                    m.ops.narrow_rejected = m.ops.narrow_rejected.saturating_add(1);
                    let entry = m.kinds.entry(expected.to_string()).or_default();
                    entry.narrow_rejected = entry.narrow_rejected.saturating_add(1);
                });
            }

            MetricsEvent::CatalogLookup { namespace, hit } => {
                metrics::with_state_mut(|m| {
                    let counter = match namespace {
                        CatalogNamespace::ItemType => &mut m.ops.item_type_lookups,
                        CatalogNamespace::View => &mut m.ops.view_lookups,
                        CatalogNamespace::Right => &mut m.ops.right_lookups,
                        CatalogNamespace::Enum => &mut m.ops.enum_lookups,
                        CatalogNamespace::Property => &mut m.ops.property_lookups,
                    };
                    *counter = counter.saturating_add(1);

                    if !hit {
                        m.ops.lookup_misses = m.ops.lookup_misses.saturating_add(1);
                    }
                });
            }

            MetricsEvent::CatalogBuilt { .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.catalogs_built = m.ops.catalogs_built.saturating_add(1);
                });
            }

            MetricsEvent::ValidationFailed { errors } => {
                metrics::with_state_mut(|m| {
                    m.ops.validation_failures = m.ops.validation_failures.saturating_add(1);
                    m.ops.validation_errors = m.ops.validation_errors.saturating_add(errors);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

/// Route one event to the scoped override, or to the global sink.
pub fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in `with_metrics_sink`.
        // - `with_metrics_sink` restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current metrics state.
///
/// `window_start_ms` filters by the counters' start time, not by
/// per-event timestamps.
#[must_use]
pub fn metrics_report(window_start_ms: Option<u64>) -> metrics::EventReport {
    metrics::report_window_start(window_start_ms)
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    struct CountingSink<'a> {
        calls: &'a AtomicUsize,
    }

    impl MetricsSink for CountingSink<'_> {
        fn record(&self, _: MetricsEvent) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct CapturingSink {
        events: Mutex<Vec<MetricsEvent>>,
    }

    impl MetricsSink for CapturingSink {
        fn record(&self, event: MetricsEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    const LOOKUP: MetricsEvent = MetricsEvent::CatalogLookup {
        namespace: CatalogNamespace::View,
        hit: true,
    };

    #[test]
    fn with_metrics_sink_routes_and_restores_nested_overrides() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });

        let outer_calls = AtomicUsize::new(0);
        let inner_calls = AtomicUsize::new(0);
        let outer = CountingSink {
            calls: &outer_calls,
        };
        let inner = CountingSink {
            calls: &inner_calls,
        };

        record(LOOKUP);
        assert_eq!(outer_calls.load(Ordering::SeqCst), 0);

        with_metrics_sink(&outer, || {
            record(LOOKUP);
            with_metrics_sink(&inner, || record(LOOKUP));

            // Inner override was restored to outer override.
            record(LOOKUP);
        });

        assert_eq!(outer_calls.load(Ordering::SeqCst), 2);
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
        SINK_OVERRIDE.with(|cell| {
            assert!(cell.borrow().is_none());
        });
    }

    #[test]
    fn with_metrics_sink_restores_override_on_panic() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });

        let calls = AtomicUsize::new(0);
        let sink = CountingSink { calls: &calls };

        let panicked = catch_unwind(AssertUnwindSafe(|| {
            with_metrics_sink(&sink, || {
                record(LOOKUP);
                panic!("intentional panic for guard test");
            });
        }))
        .is_err();
        assert!(panicked);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        SINK_OVERRIDE.with(|cell| {
            assert!(cell.borrow().is_none());
        });
    }

    #[test]
    fn global_sink_counts_lookups_and_misses() {
        metrics_reset_all();
        record(LOOKUP);
        record(MetricsEvent::CatalogLookup {
            namespace: CatalogNamespace::Right,
            hit: false,
        });

        let counters = metrics_report(None).counters.unwrap();
        assert_eq!(counters.ops.view_lookups, 1);
        assert_eq!(counters.ops.right_lookups, 1);
        assert_eq!(counters.ops.lookup_misses, 1);
    }

    #[test]
    fn global_sink_tracks_narrowing_per_kind() {
        metrics_reset_all();
        record(MetricsEvent::NarrowAccepted {
            item_type: "AssignmentItem",
        });
        record(MetricsEvent::NarrowRejected {
            expected: "AssignmentItem",
        });
        record(MetricsEvent::IdentifierIssued {
            kind: IssueKind::Temporary,
            item_type: None,
        });

        let report = metrics_report(None);
        let counters = report.counters.unwrap();
        assert_eq!(counters.ops.narrow_accepted, 1);
        assert_eq!(counters.ops.narrow_rejected, 1);
        assert_eq!(counters.ops.temporary_ids_issued, 1);
        assert_eq!(report.kind_counters.len(), 1);
        assert_eq!(report.kind_counters[0].narrow_rejected, 1);
    }

    #[test]
    fn capturing_sink_sees_events_in_order() {
        let sink = CapturingSink::default();
        with_metrics_sink(&sink, || {
            record(MetricsEvent::ValidationFailed { errors: 2 });
            record(LOOKUP);
        });

        let events = sink.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![MetricsEvent::ValidationFailed { errors: 2 }, LOOKUP]
        );
    }
}
