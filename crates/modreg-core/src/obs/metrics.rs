use crate::{
    error::ErrorClass,
    model::EntityKind,
    obs::sink::{MetricsEvent, MetricsSink, OpKind},
};
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicU64, Ordering},
};

///
/// EventCounters
///
/// In-memory counters for conversion requests.
/// Lock-free; safe to share between threads behind an `Arc`.
///

#[derive(Debug, Default)]
pub struct EventCounters {
    ops: OpCounters,
    entities: [EntityCounters; EntityKind::ALL.len()],
}

#[derive(Debug, Default)]
struct OpCounters {
    create_calls: AtomicU64,
    overlay_calls: AtomicU64,
    fields_applied: AtomicU64,
    fields_ignored: AtomicU64,
    validation_errors: AtomicU64,
    enum_errors: AtomicU64,
    mapping_errors: AtomicU64,
}

#[derive(Debug, Default)]
struct EntityCounters {
    created: AtomicU64,
    overlaid: AtomicU64,
    rejected: AtomicU64,
}

fn bump(counter: &AtomicU64, by: u64) {
    counter.fetch_add(by, Ordering::Relaxed);
}

fn load(counter: &AtomicU64) -> u64 {
    counter.load(Ordering::Relaxed)
}

impl EventCounters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    const fn entity(&self, kind: EntityKind) -> &EntityCounters {
        &self.entities[kind.index()]
    }

    /// Point-in-time copy of every counter.
    #[must_use]
    pub fn snapshot(&self) -> EventReport {
        let ops = &self.ops;
        let entities = EntityKind::ALL
            .into_iter()
            .map(|kind| {
                let counters = self.entity(kind);
                let report = EntityReport {
                    created: load(&counters.created),
                    overlaid: load(&counters.overlaid),
                    rejected: load(&counters.rejected),
                };
                (kind.to_string(), report)
            })
            .filter(|(_, report)| !report.is_empty())
            .collect();

        EventReport {
            ops: EventOps {
                create_calls: load(&ops.create_calls),
                overlay_calls: load(&ops.overlay_calls),
                fields_applied: load(&ops.fields_applied),
                fields_ignored: load(&ops.fields_ignored),
                validation_errors: load(&ops.validation_errors),
                enum_errors: load(&ops.enum_errors),
                mapping_errors: load(&ops.mapping_errors),
            },
            entities,
        }
    }

    /// Zero every counter.
    pub fn clear(&self) {
        let ops = &self.ops;
        for counter in [
            &ops.create_calls,
            &ops.overlay_calls,
            &ops.fields_applied,
            &ops.fields_ignored,
            &ops.validation_errors,
            &ops.enum_errors,
            &ops.mapping_errors,
        ] {
            counter.store(0, Ordering::Relaxed);
        }

        for entity in &self.entities {
            entity.created.store(0, Ordering::Relaxed);
            entity.overlaid.store(0, Ordering::Relaxed);
            entity.rejected.store(0, Ordering::Relaxed);
        }
    }
}

impl MetricsSink for EventCounters {
    fn record(&self, event: MetricsEvent) {
        let ops = &self.ops;

        match event {
            MetricsEvent::Created { kind } => {
                bump(&ops.create_calls, 1);
                bump(&self.entity(kind).created, 1);
            }

            MetricsEvent::Overlaid {
                kind,
                applied,
                ignored,
            } => {
                bump(&ops.overlay_calls, 1);
                bump(&ops.fields_applied, applied);
                bump(&ops.fields_ignored, ignored);
                bump(&self.entity(kind).overlaid, 1);
            }

            MetricsEvent::Rejected { op, kind, class } => {
                match op {
                    OpKind::Create => bump(&ops.create_calls, 1),
                    OpKind::Overlay => bump(&ops.overlay_calls, 1),
                }
                match class {
                    ErrorClass::Validation => bump(&ops.validation_errors, 1),
                    ErrorClass::Enum => bump(&ops.enum_errors, 1),
                    ErrorClass::Mapping => bump(&ops.mapping_errors, 1),
                }
                if let Some(kind) = kind {
                    bump(&self.entity(kind).rejected, 1);
                }
            }
        }
    }

    fn report(&self) -> Option<EventReport> {
        Some(self.snapshot())
    }

    fn reset(&self) {
        self.clear();
    }
}

///
/// EventReport
/// Serializable snapshot of `EventCounters`.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    /// Per-kind counters, keyed by kind name; kinds with no activity are omitted.
    pub entities: BTreeMap<String, EntityReport>,
}

///
/// EventOps
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Requests, successful or not
    pub create_calls: u64,
    pub overlay_calls: u64,

    // Overlay field traffic
    pub fields_applied: u64,
    pub fields_ignored: u64,

    // Rejections by class
    pub validation_errors: u64,
    pub enum_errors: u64,
    pub mapping_errors: u64,
}

///
/// EntityReport
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityReport {
    pub created: u64,
    pub overlaid: u64,
    pub rejected: u64,
}

impl EntityReport {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.created == 0 && self.overlaid == 0 && self.rejected == 0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn counts_each_event_kind() {
        let counters = EventCounters::new();

        counters.record(MetricsEvent::Created {
            kind: EntityKind::ServeModel,
        });
        counters.record(MetricsEvent::Overlaid {
            kind: EntityKind::ServeModel,
            applied: 2,
            ignored: 1,
        });
        counters.record(MetricsEvent::Rejected {
            op: OpKind::Overlay,
            kind: Some(EntityKind::RegisteredModel),
            class: ErrorClass::Enum,
        });
        counters.record(MetricsEvent::Rejected {
            op: OpKind::Create,
            kind: None,
            class: ErrorClass::Mapping,
        });

        let report = counters.snapshot();

        assert_eq!(report.ops.create_calls, 2);
        assert_eq!(report.ops.overlay_calls, 2);
        assert_eq!(report.ops.fields_applied, 2);
        assert_eq!(report.ops.fields_ignored, 1);
        assert_eq!(report.ops.enum_errors, 1);
        assert_eq!(report.ops.mapping_errors, 1);
        assert_eq!(
            report.entities["ServeModel"],
            EntityReport {
                created: 1,
                overlaid: 1,
                rejected: 0,
            }
        );
        assert_eq!(report.entities["RegisteredModel"].rejected, 1);
        assert!(!report.entities.contains_key("DocArtifact"));
    }

    #[test]
    fn clear_zeroes_everything() {
        let counters = EventCounters::new();
        counters.record(MetricsEvent::Created {
            kind: EntityKind::DocArtifact,
        });

        counters.reset();

        assert_eq!(counters.report(), Some(EventReport::default()));
    }

    #[test]
    fn concurrent_recording_loses_no_events() {
        let counters = Arc::new(EventCounters::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counters = Arc::clone(&counters);
                thread::spawn(move || {
                    for _ in 0..250 {
                        counters.record(MetricsEvent::Created {
                            kind: EntityKind::ModelVersion,
                        });
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counters.snapshot().ops.create_calls, 1_000);
    }
}
