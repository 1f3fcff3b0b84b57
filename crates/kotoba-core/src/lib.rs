pub mod annotate;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod session;
pub mod state;
pub mod token;


pub use annotate::Annotation;
pub use engine::{Analyzer, ConvertOptions, Converter, EngineError, EngineLoader, RawFeature};
pub use error::SessionError;
pub use session::{AppliedLookup, LookupOutcome, Session};
pub use state::Phase;
