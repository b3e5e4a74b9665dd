//! Observability: conversion counters and the sink boundary.
//!
//! The engine itself never records anything; callers such as the `modreg`
//! facade emit `MetricsEvent`s into a `MetricsSink` of their choosing.

mod metrics;
mod sink;

pub use metrics::{EntityReport, EventCounters, EventOps, EventReport};
pub use sink::{MetricsEvent, MetricsSink, NoopSink, OpKind};
