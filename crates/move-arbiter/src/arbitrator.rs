//! The single entry point: position + legal moves in, one legal move out.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::clients::CompletionClient;
use crate::config::ArbiterConfig;
use crate::difficulty::Difficulty;
use crate::error::ProviderError;
use crate::fallback::{FallbackSelector, RandomFallback};
use crate::legal_moves::LegalMoveSet;
use crate::move_token::{MoveResult, MoveToken};
use crate::prompt::build_prompt;
use crate::provider::MoveProvider;

/// How the returned move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveSource {
    Llm,
    Fallback,
    #[serde(rename = "none")]
    NoLegalMoves,
}

impl MoveSource {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveSource::Llm => "llm",
            MoveSource::Fallback => "fallback",
            MoveSource::NoLegalMoves => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub result: MoveResult,
    pub source: MoveSource,
}

/// Holds the shared provider and fallback; no per-request state.
pub struct MoveArbitrator {
    provider: Option<Arc<dyn MoveProvider>>,
    fallback: Arc<dyn FallbackSelector>,
}

impl MoveArbitrator {
    /// `provider == None` means no credential: every move comes from the fallback.
    pub fn new(
        provider: Option<Arc<dyn MoveProvider>>,
        fallback: Arc<dyn FallbackSelector>,
    ) -> Self {
        Self { provider, fallback }
    }

    /// Production wiring: HTTP completion client (if keyed) plus random fallback.
    pub fn from_config(config: &ArbiterConfig) -> Result<Self, ProviderError> {
        let provider = CompletionClient::new(config)?
            .map(|client| Arc::new(client) as Arc<dyn MoveProvider>);

        if provider.is_some() {
            info!(model = %config.model, url = %config.completions_url(), "LLM move provider configured");
        } else {
            info!("No LLM API key configured - moves will be chosen at random");
        }

        Ok(Self::new(provider, Arc::new(RandomFallback::new())))
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Resolve a move and return only the move.
    pub async fn resolve_move<I, S>(&self, position: &str, raw_legal_moves: I, difficulty: &str) -> MoveResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolve(position, raw_legal_moves, difficulty).await.result
    }

    /// Resolve a move, reporting whether the LLM or the fallback chose it.
    ///
    /// Never fails: every provider problem ends in a random legal move, and
    /// an empty legal-move list yields the empty result.
    pub async fn resolve<I, S>(&self, position: &str, raw_legal_moves: I, difficulty: &str) -> Resolution
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let legal = LegalMoveSet::normalize(raw_legal_moves);
        if legal.is_empty() {
            debug!(position, "No legal moves");
            return Resolution {
                result: MoveResult::empty(),
                source: MoveSource::NoLegalMoves,
            };
        }

        let difficulty = Difficulty::parse(difficulty);

        match self.suggest(position, &legal, difficulty).await {
            Ok(token) if legal.contains(&token) => {
                debug!(mv = %token, %difficulty, "Using LLM move");
                return Resolution {
                    result: MoveResult::from(&token),
                    source: MoveSource::Llm,
                };
            }
            Ok(token) => {
                warn!(mv = %token, legal = legal.len(), "LLM suggested a move outside the legal set, falling back");
            }
            Err(ProviderError::ConfigurationAbsent) => {
                debug!("No LLM provider, falling back");
            }
            Err(e) => {
                warn!(error = %e, "LLM move unavailable, falling back");
            }
        }

        self.fall_back(&legal)
    }

    async fn suggest(
        &self,
        position: &str,
        legal: &LegalMoveSet,
        difficulty: Difficulty,
    ) -> Result<MoveToken, ProviderError> {
        let provider = self.provider.as_ref().ok_or(ProviderError::ConfigurationAbsent)?;
        let prompt = build_prompt(position, legal, difficulty);
        provider
            .fetch_move(&prompt.system, &prompt.user, difficulty.temperature())
            .await
    }

    fn fall_back(&self, legal: &LegalMoveSet) -> Resolution {
        match self.fallback.pick(legal) {
            Some(token) => Resolution {
                result: MoveResult::from(&token),
                source: MoveSource::Fallback,
            },
            // Unreachable: `resolve` returns early on an empty set.
            None => Resolution {
                result: MoveResult::empty(),
                source: MoveSource::NoLegalMoves,
            },
        }
    }
}
