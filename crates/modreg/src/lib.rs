//! ## Crate layout
//! - `core`: entity records and payloads, the field-policy table, the
//!   creation mapper and the update overlay engine.
//! - `config`: TOML configuration for the converter.
//! - `converter`: the configured entry point used by the request layer.
//! - `error`: public error type with a stable kind taxonomy.
//!
//! The engine is pure. It never persists, stamps server fields or retries;
//! those belong to the storage collaborator (see `core::stamp`).

pub use modreg_config as config;
pub use modreg_core as core;

pub mod converter;
pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use converter::Converter;
pub use error::{Error, ErrorKind};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Converter, Error, ErrorKind,
        config::ConverterConfig,
        core::{
            entity::*,
            model::EntityKind,
            payload::FieldSet,
            record::{CreatePayload, Record, UpdatePayload},
            traits::{Entity as _, FieldValues as _},
            types::*,
            value::Value,
        },
    };
}
