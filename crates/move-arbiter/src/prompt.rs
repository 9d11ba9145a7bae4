//! Prompt text for the completion request.

use crate::difficulty::Difficulty;
use crate::legal_moves::LegalMoveSet;

const SYSTEM_PROMPT: &str = "\
You are a chess engine playing against a human. \
You are given the current position in FEN and the list of legal moves in UCI notation. \
Reply with exactly one move copied from that list, for example e2e4 or e7e8q. \
Do not add any other text.";

/// System and user instructions for one move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Format the request. The move list is rendered as-is, in set order.
pub fn build_prompt(position: &str, legal_moves: &LegalMoveSet, difficulty: Difficulty) -> Prompt {
    let moves = legal_moves
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let user = format!(
        "Position (FEN): {position}\n\
         Legal moves: {moves}\n\
         Difficulty: {label} - {hint}.\n\
         Answer with exactly one move from the legal moves list in UCI notation and nothing else.",
        label = difficulty.label(),
        hint = difficulty.hint(),
    );

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
