//! Error types shared by the configuration model, rule engine and manifest builder
//!
//! Three families, each handled differently at the CLI boundary:
//!
//! - [`ConfigError`]: the settings document is unusable; nothing can be generated
//! - [`Rejection`]: the request is understood but not allowed for this project
//! - [`InvariantViolation`]: the rule engine produced something it never should

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a project configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        Self::invalid(field, "required key is missing")
    }

    /// Settings key responsible for the error, if the document itself parsed
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Machine-readable code naming the rule a request violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionReason {
    NameRequired,
    InvalidName,
    UnsupportedViewKind,
    ReactUsesDedicatedSubgenerator,
    FactoryRequiresAngular,
    ModelRequiresBackbone,
}

impl RejectionReason {
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::NameRequired => "name-required",
            RejectionReason::InvalidName => "invalid-name",
            RejectionReason::UnsupportedViewKind => "unsupported-view-kind",
            RejectionReason::ReactUsesDedicatedSubgenerator => {
                "react-uses-dedicated-subgenerator"
            }
            RejectionReason::FactoryRequiresAngular => "factory-requires-angular",
            RejectionReason::ModelRequiresBackbone => "model-requires-backbone",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A request that cannot be honoured for the loaded configuration
///
/// Returned instead of a manifest; no output path is ever computed for a
/// rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message} [{reason}]")]
pub struct Rejection {
    pub reason: RejectionReason,
    pub message: String,
}

impl Rejection {
    pub fn new(reason: RejectionReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// Rule engine defect detected while building a manifest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("output path `{path}` selected twice (by `{first}` and `{second}`)")]
    DuplicateOutputPath {
        path: String,
        first: String,
        second: String,
    },
}

/// Everything that can stop a request from producing a plan
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}
