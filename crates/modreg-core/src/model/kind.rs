use crate::error::MappingError;
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// EntityKind
///
/// Resource types managed by the registry.
///

#[derive(
    CandidType, Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum EntityKind {
    RegisteredModel,
    ModelVersion,
    ModelArtifact,
    DocArtifact,
    ServingEnvironment,
    InferenceService,
    ServeModel,
}

impl EntityKind {
    pub const ALL: [Self; 7] = [
        Self::RegisteredModel,
        Self::ModelVersion,
        Self::ModelArtifact,
        Self::DocArtifact,
        Self::ServingEnvironment,
        Self::InferenceService,
        Self::ServeModel,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RegisteredModel => "RegisteredModel",
            Self::ModelVersion => "ModelVersion",
            Self::ModelArtifact => "ModelArtifact",
            Self::DocArtifact => "DocArtifact",
            Self::ServingEnvironment => "ServingEnvironment",
            Self::InferenceService => "InferenceService",
            Self::ServeModel => "ServeModel",
        }
    }

    /// Dense position of this kind in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = MappingError;

    // Kind names from dynamic callers are matched ASCII case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MappingError::UnknownKind {
                name: s.to_string(),
            })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (position, kind) in EntityKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_rejects_unknown() {
        assert_eq!(
            "servemodel".parse::<EntityKind>().unwrap(),
            EntityKind::ServeModel
        );

        let err = "Experiment".parse::<EntityKind>().unwrap_err();
        assert_eq!(
            err,
            MappingError::UnknownKind {
                name: "Experiment".to_string()
            }
        );
    }
}
