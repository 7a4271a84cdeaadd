use thiserror::Error;

use crate::engine::{EngineError, Parameter};

/// Which half of a context a failure concerns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HandleKind {
    Encoder,
    Decoder,
}

impl std::fmt::Display for HandleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandleKind::Encoder => write!(f, "encoder"),
            HandleKind::Decoder => write!(f, "decoder"),
        }
    }
}

/// Context construction failure.
/// - Every variant is reported only after all acquired handles were released.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The engine could not allocate a session handle.
    #[error("{engine}: failed to allocate {handle} session")]
    Allocation {
        engine: &'static str,
        handle: HandleKind,
    },

    /// The engine rejected a default parameter.
    #[error("{engine}: {handle} rejected {param:?}: {source}")]
    Configuration {
        engine: &'static str,
        handle: HandleKind,
        param: Parameter,
        #[source]
        source: EngineError,
    },
}
