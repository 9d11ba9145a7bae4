//! Coordinate move tokens (`e2e4`, `e7e8q`) and their decomposed form.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Full-string grammar of a lowercase move token.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-h][1-8][a-h][1-8][qrbn]?$").expect("valid token regex"));

/// A normalized move: origin square, destination square, optional promotion.
///
/// Always lowercase and always matches `[a-h][1-8][a-h][1-8][qrbn]?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveToken(String);

impl MoveToken {
    /// Trim, lowercase, then validate. Returns None for anything off-grammar.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        if TOKEN_RE.is_match(&normalized) {
            Some(Self(normalized))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn origin(&self) -> &str {
        &self.0[0..2]
    }

    pub fn destination(&self) -> &str {
        &self.0[2..4]
    }

    /// Promotion piece letter, if the token carries one.
    pub fn promotion(&self) -> Option<&str> {
        self.0.get(4..5)
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A move handed back to the caller, split into its parts.
///
/// The all-empty value (see [`MoveResult::empty`]) means the position had no
/// legal moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    pub move_token: String,
    pub origin: String,
    pub destination: String,
    pub promotion: Option<String>,
}

impl MoveResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.move_token.is_empty()
    }
}

impl From<&MoveToken> for MoveResult {
    fn from(token: &MoveToken) -> Self {
        Self {
            move_token: token.as_str().to_string(),
            origin: token.origin().to_string(),
            destination: token.destination().to_string(),
            promotion: token.promotion().map(str::to_string),
        }
    }
}
