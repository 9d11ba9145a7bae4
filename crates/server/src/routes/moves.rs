use std::sync::Arc;

use axum::{Extension, Json};
use move_arbiter::{MoveArbitrator, Resolution};
use serde::{Deserialize, Serialize};

use crate::chess_rules;
use crate::error::AppError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub fen: String,
    pub legal_moves: Option<Vec<String>>,
    pub difficulty: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub mv: String,
    pub from: String,
    pub to: String,
    pub promotion: Option<String>,
    pub source: &'static str,
}

impl From<Resolution> for MoveResponse {
    fn from(r: Resolution) -> Self {
        Self {
            mv: r.result.move_token,
            from: r.result.origin,
            to: r.result.destination,
            promotion: r.result.promotion,
            source: r.source.as_str(),
        }
    }
}

/// POST /api/move
/// Ask the opponent for its move. Without `legalMoves` the list is derived
/// from the FEN. An empty `move` means the side to move has no legal moves.
pub async fn get_move(
    Extension(arbiter): Extension<Arc<MoveArbitrator>>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, AppError> {
    if req.fen.trim().is_empty() {
        return Err(AppError::BadRequest("fen is required".into()));
    }

    let legal_moves = match req.legal_moves {
        Some(moves) => moves,
        None => chess_rules::legal_moves_from_fen(&req.fen)?,
    };
    let difficulty = req.difficulty.as_deref().unwrap_or("medium");

    let resolution = arbiter.resolve(&req.fen, legal_moves, difficulty).await;
    tracing::info!(
        mv = %resolution.result.move_token,
        source = resolution.source.as_str(),
        difficulty,
        "Resolved move"
    );

    Ok(Json(resolution.into()))
}
