//! Legal-move generation for requests that only carry a FEN.
//!
//! The arbitrator never looks inside a position; this is the one place the
//! server evaluates chess rules, and only when the caller leaves the move
//! list out.

use shakmaty::{fen::Fen, CastlingMode, Chess, Position};

use crate::error::AppError;

/// Legal moves for the side to move, in UCI notation (`e1g1` for castling).
pub fn legal_moves_from_fen(fen: &str) -> Result<Vec<String>, AppError> {
    let parsed: Fen = fen
        .trim()
        .parse()
        .map_err(|e| AppError::BadRequest(format!("Invalid FEN: {e}")))?;

    let pos: Chess = parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| AppError::BadRequest(format!("Illegal position: {e}")))?;

    Ok(pos
        .legal_moves()
        .iter()
        .map(|m| m.to_uci(CastlingMode::Standard).to_string())
        .collect())
}
