//! Observability: runtime counters and the sink abstraction that feeds them.
//!
//! Identifier and catalogue code never touch `metrics` directly; every
//! event goes through `sink::record`.

pub(crate) mod metrics;
pub mod sink;

// re-exports
pub use metrics::{EventReport, ItemKindSummary};
pub use sink::{
    CatalogNamespace, IssueKind, MetricsEvent, MetricsSink, metrics_report, metrics_reset_all,
    record, with_metrics_sink,
};
