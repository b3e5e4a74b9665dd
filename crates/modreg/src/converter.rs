use crate::error::Error;
use modreg_config::{ConfigError, ConverterConfig, NonEditableFields};
use modreg_core::{
    convert::{self, NonEditablePolicy, OverlayOptions},
    error::ConvertError,
    model::EntityKind,
    obs::{EventCounters, EventReport, MetricsEvent, MetricsSink, NoopSink, OpKind},
    record::{CreatePayload, Record, UpdatePayload},
    traits::Entity,
};
use std::{path::Path, sync::Arc};

///
/// Converter
///
/// Configured entry point for the request layer. Wraps the pure engine with
/// the configured overlay policy, metrics and logging, and converts engine
/// errors into the public `Error`.
///
/// Cheap to clone; clones share one metrics sink.
///

#[derive(Clone)]
pub struct Converter {
    options: OverlayOptions,
    sink: Arc<dyn MetricsSink>,
}

impl Converter {
    #[must_use]
    pub fn new(config: &ConverterConfig) -> Self {
        let sink: Arc<dyn MetricsSink> = if config.metrics.enabled {
            Arc::new(EventCounters::new())
        } else {
            Arc::new(NoopSink)
        };

        Self::with_sink(config, sink)
    }

    /// Build with a caller-supplied metrics sink, ignoring `metrics.enabled`.
    #[must_use]
    pub fn with_sink(config: &ConverterConfig, sink: Arc<dyn MetricsSink>) -> Self {
        let non_editable = match config.overlay.non_editable_fields {
            NonEditableFields::Ignore => NonEditablePolicy::Ignore,
            NonEditableFields::Reject => NonEditablePolicy::Reject,
        };

        Self {
            options: OverlayOptions { non_editable },
            sink,
        }
    }

    /// Load the configuration file at `path` and build from it.
    pub fn from_config_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = ConverterConfig::from_path(path)?;

        Ok(Self::new(&config))
    }

    #[must_use]
    pub const fn options(&self) -> OverlayOptions {
        self.options
    }

    //
    // Create
    //

    pub fn create_record(&self, kind: EntityKind, payload: CreatePayload) -> Result<Record, Error> {
        let result = convert::create_record(kind, payload);

        self.finish_create(Some(kind), result)
    }

    /// Create from a kind name supplied by a dynamic caller.
    pub fn create_by_name(&self, kind: &str, payload: CreatePayload) -> Result<Record, Error> {
        match kind.parse::<EntityKind>() {
            Ok(kind) => self.create_record(kind, payload),
            Err(err) => Err(self.reject(OpKind::Create, None, err.into())),
        }
    }

    pub fn create<E: Entity>(&self, payload: E::Create) -> Result<E, Error> {
        self.finish_create(Some(E::KIND), convert::create::<E>(payload))
    }

    //
    // Overlay
    //

    pub fn overlay_update(
        &self,
        kind: EntityKind,
        payload: UpdatePayload,
        current: &Record,
    ) -> Result<Record, Error> {
        match convert::overlay_update_with(kind, payload, current, self.options) {
            Ok(outcome) => {
                self.record_overlaid(kind, outcome.applied, outcome.ignored);
                Ok(outcome.record)
            }
            Err(err) => Err(self.reject(OpKind::Overlay, Some(kind), err)),
        }
    }

    pub fn overlay<E: Entity>(&self, payload: E::Update, current: &E) -> Result<E, Error> {
        match convert::overlay_with(payload, current, self.options) {
            Ok(outcome) => {
                self.record_overlaid(E::KIND, outcome.applied, outcome.ignored);
                Ok(outcome.record)
            }
            Err(err) => Err(self.reject(OpKind::Overlay, Some(E::KIND), err)),
        }
    }

    //
    // Metrics
    //

    /// Counters gathered so far; `None` when metrics are disabled.
    #[must_use]
    pub fn metrics(&self) -> Option<EventReport> {
        self.sink.report()
    }

    pub fn reset_metrics(&self) {
        self.sink.reset();
    }

    //
    // Internals
    //

    fn finish_create<T>(
        &self,
        kind: Option<EntityKind>,
        result: Result<T, ConvertError>,
    ) -> Result<T, Error> {
        match result {
            Ok(record) => {
                if let Some(kind) = kind {
                    self.sink.record(MetricsEvent::Created { kind });
                }
                Ok(record)
            }
            Err(err) => Err(self.reject(OpKind::Create, kind, err)),
        }
    }

    fn record_overlaid(&self, kind: EntityKind, applied: usize, ignored: usize) {
        self.sink.record(MetricsEvent::Overlaid {
            kind,
            applied: u64::try_from(applied).unwrap_or(u64::MAX),
            ignored: u64::try_from(ignored).unwrap_or(u64::MAX),
        });
    }

    fn reject(&self, op: OpKind, kind: Option<EntityKind>, err: ConvertError) -> Error {
        let class = err.class();
        let kind = err.kind().or(kind);

        if err.is_caller_bug() {
            tracing::warn!(%op, kind = ?kind, %class, error = %err, "conversion rejected");
        } else {
            tracing::debug!(%op, kind = ?kind, %class, error = %err, "conversion rejected");
        }

        self.sink.record(MetricsEvent::Rejected { op, kind, class });

        err.into()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&ConverterConfig::default())
    }
}

///
/// TESTS
///
