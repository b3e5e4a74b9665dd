mod metadata;
mod state;
mod timestamp;

pub use metadata::{CustomProperties, MetadataValue};
pub use state::{
    ArtifactState, ExecutionState, InferenceServiceState, ModelVersionState,
    RegisteredModelState, UnknownToken,
};
pub use timestamp::{Timestamp, TimestampParseError};
