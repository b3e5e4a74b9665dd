//! Enumerated lifecycle states carried by registry entities.
//!
//! Every enumeration is declared once through `wire_enum!`, which generates
//! the typed enum, its wire tokens, and the policy-table `EnumModel`.
//! Token matching is exact; unknown tokens never coerce to a default member.

use crate::{
    model::EnumModel,
    traits::{FieldValue, WireEnum},
    value::{Value, ValueError},
};
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// UnknownToken
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown {enum_name} value '{value}'")]
pub struct UnknownToken {
    pub enum_name: &'static str,
    pub value: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            CandidType, Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl WireEnum for $name {
            const MODEL: EnumModel = EnumModel {
                name: stringify!($name),
                tokens: &[$($token),+],
            };

            fn as_token(self) -> &'static str {
                self.as_str()
            }

            fn from_token(token: &str) -> Option<Self> {
                match token {
                    $( $token => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_token(s).ok_or_else(|| UnknownToken {
                    enum_name: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl FieldValue for Option<$name> {
            fn to_value(&self) -> Value {
                self.map_or(Value::Null, |state| Value::Enum(state.as_str().to_string()))
            }

            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::Null => Ok(None),
                    Value::Enum(token) | Value::Text(token) => token
                        .parse::<$name>()
                        .map(Some)
                        .map_err(ValueError::from),
                    other => Err(ValueError::shape("enum", &other)),
                }
            }
        }
    };
}

wire_enum! {
    /// Lifecycle state of a registered model.
    RegisteredModelState {
        Live => "LIVE",
        Archived => "ARCHIVED",
    }
}

wire_enum! {
    /// Lifecycle state of a model version.
    ModelVersionState {
        Live => "LIVE",
        Archived => "ARCHIVED",
    }
}

wire_enum! {
    /// State of an artifact (model or document).
    ArtifactState {
        Unknown => "UNKNOWN",
        Pending => "PENDING",
        Live => "LIVE",
        MarkedForDeletion => "MARKED_FOR_DELETION",
        Deleted => "DELETED",
        Abandoned => "ABANDONED",
        Reference => "REFERENCE",
    }
}

wire_enum! {
    /// Last observed state of an execution such as a serve-model action.
    ExecutionState {
        Unknown => "UNKNOWN",
        New => "NEW",
        Running => "RUNNING",
        Complete => "COMPLETE",
        Failed => "FAILED",
        Cached => "CACHED",
        Canceled => "CANCELED",
    }
}

wire_enum! {
    /// Desired deployment state of an inference service.
    InferenceServiceState {
        Deployed => "DEPLOYED",
        Undeployed => "UNDEPLOYED",
    }
}

///
/// TESTS
///
