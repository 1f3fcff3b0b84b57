use crate::engine::EngineError;
use crate::state::Phase;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Engine not ready (session is {0})")]
    NotReady(Phase),

    #[error("Initialization already in progress")]
    InitInProgress,

    #[error("Initialization failed: {0}")]
    InitializationFailure(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailure(#[source] EngineError),
}
