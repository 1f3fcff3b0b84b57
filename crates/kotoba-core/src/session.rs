//! Session orchestrator.
//!
//! A [`Session`] owns both engine handles and the request counter. It is
//! built once by the caller and shared by reference (usually behind an
//! `Arc`) with everything that analyzes, annotates or looks up text.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use kotoba_config::session::SessionConfig;
use kotoba_dictionary::{DictionaryEntry, DictionaryProvider};
use kotoba_types::{ReadingStyle, Token};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::annotate::{self, Annotation};
use crate::engine::EngineLoader;
use crate::error::SessionError;
use crate::lookup::{list_token, lookup_token};
use crate::state::{EngineState, Engines, Phase};
use crate::token::format_tokens;

/// Result of a lookup as seen by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Still the latest request; the entry (or its absence) was applied
    Applied(Option<DictionaryEntry>),
    /// A newer request started meanwhile; the result was discarded
    Stale,
}

/// The last lookup result applied to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedLookup {
    pub seq: u64,
    pub token: Token,
    pub entry: Option<DictionaryEntry>,
}

const CANCELLED_INIT: &str = "initialization cancelled";

pub struct Session {
    id: Uuid,
    dictionary_path: PathBuf,
    loader: Arc<dyn EngineLoader>,
    provider: Arc<dyn DictionaryProvider>,
    state: RwLock<EngineState>,
    reading_style: RwLock<ReadingStyle>,
    request_seq: AtomicU64,
    last_lookup: RwLock<Option<AppliedLookup>>,
}

impl Session {
    pub fn new(
        config: &SessionConfig,
        loader: Arc<dyn EngineLoader>,
        provider: Arc<dyn DictionaryProvider>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            dictionary_path: config.dictionary_path.clone(),
            loader,
            provider,
            state: RwLock::new(EngineState::Uninitialized),
            reading_style: RwLock::new(config.reading_style),
            request_seq: AtomicU64::new(0),
            last_lookup: RwLock::new(None),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub async fn phase(&self) -> Phase {
        self.state.read().await.phase()
    }

    pub async fn error_detail(&self) -> Option<String> {
        self.state.read().await.error_detail().map(str::to_string)
    }

    /// Number of `analyze`/`lookup` calls made so far
    pub fn request_seq(&self) -> u64 {
        self.request_seq.load(Ordering::SeqCst)
    }

    pub async fn reading_style(&self) -> ReadingStyle {
        *self.reading_style.read().await
    }

    /// Applies to annotations requested from now on
    pub async fn set_reading_style(&self, style: ReadingStyle) {
        *self.reading_style.write().await = style;
        tracing::info!(session = %self.id, %style, "Reading style changed");
    }

    pub async fn last_lookup(&self) -> Option<AppliedLookup> {
        self.last_lookup.read().await.clone()
    }

    /// Build both engines concurrently.
    ///
    /// Becomes `Ready` when both succeed, `Error` on the first failure
    /// without waiting for the other. A `Ready` session is left untouched;
    /// an `Error` session may be initialized again. Dropping the future
    /// before it resolves leaves the session in `Error`.
    pub async fn init(&self) -> Result<(), SessionError> {
        {
            let mut state = self.state.write().await;
            match *state {
                EngineState::Ready(_) => return Ok(()),
                EngineState::Initializing => return Err(SessionError::InitInProgress),
                EngineState::Uninitialized | EngineState::Error(_) => {}
            }
            *state = EngineState::Initializing;
        }
        let mut guard = InitGuard {
            session: self,
            finished: false,
        };

        tracing::info!(
            session = %self.id,
            path = %self.dictionary_path.display(),
            "Initializing engines"
        );

        let result = tokio::try_join!(
            self.loader.build_analyzer(&self.dictionary_path),
            self.loader.init_converter(&self.dictionary_path),
        );

        let mut state = self.state.write().await;
        guard.finished = true;
        match result {
            Ok((analyzer, converter)) => {
                *state = EngineState::Ready(Engines {
                    analyzer,
                    converter,
                });
                tracing::info!(session = %self.id, "Engines ready");
                Ok(())
            }
            Err(e) => {
                let detail = e.to_string();
                tracing::error!(session = %self.id, "Engine initialization failed: {}", detail);
                *state = EngineState::Error(detail.clone());
                Err(SessionError::InitializationFailure(detail))
            }
        }
    }

    /// Split `text` into tokens. Blank text never reaches the analyzer.
    pub async fn analyze(&self, text: &str) -> Result<Vec<Token>, SessionError> {
        let seq = self.begin_request().await;

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let engines = self.engines().await?;
        let features = engines.analyzer.tokenize(text).map_err(|e| {
            tracing::warn!(session = %self.id, seq, "Analysis failed: {}", e);
            SessionError::AnalysisFailure(e)
        })?;

        let tokens = format_tokens(features);
        tracing::debug!(session = %self.id, seq, "Analyzed into {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Furigana markup for `text` in the current reading style
    pub async fn annotate(&self, text: &str) -> Result<Annotation, SessionError> {
        let engines = self.engines().await?;
        let style = self.reading_style().await;
        Ok(annotate::annotate(engines.converter.as_ref(), text, style).await)
    }

    /// Annotate a whole token row; failures degrade single tokens only
    pub async fn annotate_tokens(&self, tokens: &[Token]) -> Result<Vec<Annotation>, SessionError> {
        let engines = self.engines().await?;
        let style = self.reading_style().await;
        Ok(annotate::annotate_tokens(engines.converter.as_ref(), tokens, style).await)
    }

    /// Resolve a token to a dictionary entry.
    ///
    /// The result is applied only if no other `analyze`/`lookup` started
    /// while this one was in flight.
    pub async fn lookup(&self, token: &Token) -> Result<LookupOutcome, SessionError> {
        let seq = self.begin_request().await;
        self.engines().await?;

        let entry = lookup_token(self.provider.as_ref(), token).await;

        let mut last = self.last_lookup.write().await;
        if self.request_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(
                session = %self.id,
                seq,
                word = %token.base_form,
                "Discarding stale lookup result"
            );
            return Ok(LookupOutcome::Stale);
        }

        *last = Some(AppliedLookup {
            seq,
            token: token.clone(),
            entry: entry.clone(),
        });
        Ok(LookupOutcome::Applied(entry))
    }

    /// Every dictionary candidate for a token, for a details view.
    ///
    /// Read-only: it neither counts as a request nor replaces the applied
    /// lookup.
    pub async fn lookup_all(&self, token: &Token) -> Result<Vec<DictionaryEntry>, SessionError> {
        self.engines().await?;
        Ok(list_token(self.provider.as_ref(), token).await)
    }

    /// Bump the request counter; serialized with lookup application
    async fn begin_request(&self) -> u64 {
        let _guard = self.last_lookup.write().await;
        self.request_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn engines(&self) -> Result<Engines, SessionError> {
        match &*self.state.read().await {
            EngineState::Ready(engines) => Ok(engines.clone()),
            other => Err(SessionError::NotReady(other.phase())),
        }
    }
}

/// Resets an `Initializing` session whose `init` future was dropped
struct InitGuard<'a> {
    session: &'a Session,
    finished: bool,
}

impl Drop for InitGuard<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        match self.session.state.try_write() {
            Ok(mut state) => {
                if matches!(*state, EngineState::Initializing) {
                    *state = EngineState::Error(CANCELLED_INIT.to_string());
                }
                tracing::warn!(session = %self.session.id, "Engine initialization cancelled");
            }
            Err(_) => {
                tracing::error!(
                    session = %self.session.id,
                    "Engine initialization cancelled while state was locked"
                );
            }
        }
    }
}
