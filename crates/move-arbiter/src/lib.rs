//! Move arbitration for an LLM-backed chess opponent.
//!
//! The arbitrator asks an external completion endpoint for a move, checks the
//! answer against the legal moves supplied by the caller and falls back to a
//! random legal move whenever the suggestion is missing or unusable.

pub mod arbitrator;
pub mod clients;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod fallback;
pub mod legal_moves;
pub mod move_token;
pub mod prompt;
pub mod provider;

pub use arbitrator::{MoveArbitrator, MoveSource, Resolution};
pub use config::ArbiterConfig;
pub use difficulty::Difficulty;
pub use error::ProviderError;
pub use fallback::{FallbackSelector, RandomFallback};
pub use legal_moves::LegalMoveSet;
pub use move_token::{MoveResult, MoveToken};
pub use provider::MoveProvider;
