//! Metrics sink boundary.
//!
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.

use crate::{error::ErrorClass, model::EntityKind, obs::metrics::EventReport};
use std::fmt;

///
/// OpKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpKind {
    Create,
    Overlay,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Overlay => "overlay",
        })
    }
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    Created {
        kind: EntityKind,
    },
    Overlaid {
        kind: EntityKind,
        applied: u64,
        ignored: u64,
    },
    Rejected {
        op: OpKind,
        /// `None` when the request named no resolvable kind.
        kind: Option<EntityKind>,
        class: ErrorClass,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink: Send + Sync {
    fn record(&self, event: MetricsEvent);

    /// Snapshot of what this sink has counted, if it keeps counts.
    fn report(&self) -> Option<EventReport> {
        None
    }

    /// Clear any counts kept by this sink.
    fn reset(&self) {}
}

///
/// NoopSink
/// Discards every event; used when metrics are disabled.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl MetricsSink for NoopSink {
    fn record(&self, _event: MetricsEvent) {}
}
