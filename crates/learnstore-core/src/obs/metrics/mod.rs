use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    collections::BTreeMap,
    time::{SystemTime, UNIX_EPOCH},
};

///
/// EventState
/// Ephemeral, in-memory counters for identifier and catalogue activity.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub kinds: BTreeMap<String, ItemKindCounters>,
    pub since_ms: u64,
}

impl Default for EventState {
    fn default() -> Self {
        Self {
            ops: EventOps::default(),
            kinds: BTreeMap::new(),
            since_ms: now_millis(),
        }
    }
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventOps {
    // Identifier issuance
    pub ids_issued: u64,
    pub temporary_ids_issued: u64,
    pub placeholder_ids_issued: u64,

    // Narrowing generic -> typed
    pub narrow_accepted: u64,
    pub narrow_rejected: u64,

    // Catalogue lookups
    pub item_type_lookups: u64,
    pub view_lookups: u64,
    pub right_lookups: u64,
    pub enum_lookups: u64,
    pub property_lookups: u64,
    pub lookup_misses: u64,

    // Catalogue builds
    pub catalogs_built: u64,
    pub validation_failures: u64,
    pub validation_errors: u64,
}

///
/// ItemKindCounters
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ItemKindCounters {
    pub ids_issued: u64,
    pub narrow_accepted: u64,
    pub narrow_rejected: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

///
/// EventReport
/// Counter snapshot plus per-item-kind summaries.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    /// Ephemeral runtime counters since `since_ms`.
    pub counters: Option<EventState>,
    /// Per-item-kind counters with the rejection ratio precomputed.
    pub kind_counters: Vec<ItemKindSummary>,
}

///
/// ItemKindSummary
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ItemKindSummary {
    pub item_type: String,
    pub ids_issued: u64,
    pub narrow_accepted: u64,
    pub narrow_rejected: u64,
    pub narrow_reject_ratio: f64,
}

/// Build a report; counters are dropped when they started before `window_start_ms`.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub(crate) fn report_window_start(window_start_ms: Option<u64>) -> EventReport {
    let snap = with_state(Clone::clone);
    if let Some(start) = window_start_ms
        && snap.since_ms < start
    {
        return EventReport::default();
    }

    let kind_counters = snap
        .kinds
        .iter()
        .map(|(item_type, c)| {
            let narrows = c.narrow_accepted.saturating_add(c.narrow_rejected);
            let ratio = if narrows > 0 {
                c.narrow_rejected as f64 / narrows as f64
            } else {
                0.0
            };

            ItemKindSummary {
                item_type: item_type.clone(),
                ids_issued: c.ids_issued,
                narrow_accepted: c.narrow_accepted,
                narrow_rejected: c.narrow_rejected,
                narrow_reject_ratio: ratio,
            }
        })
        .collect();

    EventReport {
        counters: Some(snap),
        kind_counters,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_computes_reject_ratio_per_kind() {
        reset_all();
        with_state_mut(|m| {
            let entry = m.kinds.entry("AssignmentItem".to_string()).or_default();
            entry.narrow_accepted = 3;
            entry.narrow_rejected = 1;
        });

        let report = report_window_start(None);
        let summary = &report.kind_counters[0];

        assert_eq!(summary.item_type, "AssignmentItem");
        assert!((summary.narrow_reject_ratio - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn report_with_future_window_start_is_empty() {
        reset_all();
        let since = with_state(|m| m.since_ms);

        let report = report_window_start(Some(since.saturating_add(60_000)));
        assert!(report.counters.is_none());
        assert!(report.kind_counters.is_empty());
    }

    #[test]
    fn report_serializes_to_json() {
        reset_all();
        with_state_mut(|m| m.ops.ids_issued = 2);

        let json = serde_json::to_value(report_window_start(None)).unwrap();
        assert_eq!(json["counters"]["ops"]["ids_issued"], 2);
    }
}
