use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::error::ProviderError;
use crate::move_token::MoveToken;

/// Unanchored, case-insensitive token search used on free-form replies.
static TOKEN_SEARCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-h][1-8][a-h][1-8][qrbn]?").expect("valid token search regex")
});

/// A source of move suggestions. The answer is a candidate only; the
/// arbitrator still checks it against the legal moves.
#[async_trait]
pub trait MoveProvider: Send + Sync {
    async fn fetch_move(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<MoveToken, ProviderError>;
}

/// Pull a move token out of reply text.
///
/// Takes the first grammar match anywhere in the text so that commentary
/// around the move is tolerated, otherwise tries the trimmed reply as a whole.
pub fn extract_move_token(content: &str) -> Result<MoveToken, ProviderError> {
    TOKEN_SEARCH_RE
        .find(content)
        .and_then(|m| MoveToken::parse(m.as_str()))
        .or_else(|| MoveToken::parse(content.trim()))
        .ok_or_else(|| ProviderError::NoMoveToken(content.chars().take(80).collect()))
}
