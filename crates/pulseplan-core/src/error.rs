//! Errors raised while generating a plan.

use thiserror::Error;

/// Failures of the generation pipeline. Every variant points at a
/// knowledge-base or template authoring bug; generation never returns a
/// partial plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("cannot pick from an empty list: {what}")]
    EmptyInput { what: &'static str },

    #[error("platform {0:?} is missing from the platform library")]
    UnknownPlatform(String),

    #[error("template references unknown placeholder {{{placeholder}}}: {template:?}")]
    UnknownPlaceholder {
        placeholder: String,
        template: String,
    },

    #[error("unterminated placeholder in template: {0:?}")]
    UnterminatedPlaceholder(String),
}
