use std::fmt;
use std::sync::Arc;

use crate::engine::{Analyzer, Converter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initializing,
    Ready,
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Initializing => "initializing",
            Phase::Ready => "ready",
            Phase::Error => "error",
        };
        f.write_str(name)
    }
}

/// Engine handles, shared by every call once built
#[derive(Clone)]
pub struct Engines {
    pub analyzer: Arc<dyn Analyzer>,
    pub converter: Arc<dyn Converter>,
}

/// Lifecycle of a session's engines; handles only exist while `Ready`
#[derive(Clone, Default)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Initializing,
    Ready(Engines),
    Error(String),
}

impl EngineState {
    pub fn phase(&self) -> Phase {
        match self {
            EngineState::Uninitialized => Phase::Uninitialized,
            EngineState::Initializing => Phase::Initializing,
            EngineState::Ready(_) => Phase::Ready,
            EngineState::Error(_) => Phase::Error,
        }
    }

    pub fn error_detail(&self) -> Option<&str> {
        match self {
            EngineState::Error(detail) => Some(detail),
            _ => None,
        }
    }
}
