//! HTTP surface: routing, the per-flow pipelines, and response mapping.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::game::{self, Board, Move, MoveError, Outcome};
use crate::store::{BoardId, BoardStore, StoreError};

/// Wire message for a read or move against an unknown board id.
const NOT_FOUND_MESSAGE: &str = "Board not found!!!";
/// Wire message for a rejected move.
const INVALID_MOVE_MESSAGE: &str = "Invalid move!!!";

/// Form body of a move request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveForm {
    /// Target row (0-2).
    pub row: i64,
    /// Target column (0-2).
    pub col: i64,
    /// Player making the move (1 or 2).
    pub p: i64,
}

/// Wire representation of a game's terminal status.
///
/// Both fields are absent while the game is live; exactly one is set once
/// it ends.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameStatus {
    /// Winning player number, if the game was won.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<u8>,
    /// Set to `true` when the board filled with no winner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie: Option<bool>,
}

impl From<Option<Outcome>> for GameStatus {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            Some(Outcome::Winner(player)) => Self {
                winner: Some(player.as_int()),
                tie: None,
            },
            Some(Outcome::Tie) => Self {
                winner: None,
                tie: Some(true),
            },
            None => Self::default(),
        }
    }
}

/// Response body shared by every flow. Absent fields are omitted from the
/// JSON; `gameStatus` is always present, `{}` while the game is live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    /// Id of the board the request addressed, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<BoardId>,
    /// Board state, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
    /// Explanation of a failed request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Terminal status of the game.
    pub game_status: GameStatus,
}

impl BoardResponse {
    fn ok(id: BoardId, board: Board, outcome: Option<Outcome>) -> Self {
        Self {
            board_id: Some(id),
            board: Some(board),
            error_message: None,
            game_status: outcome.into(),
        }
    }

    fn error(message: &str, id: Option<BoardId>, board: Option<Board>) -> Self {
        Self {
            board_id: id,
            board,
            error_message: Some(message.to_string()),
            game_status: GameStatus::default(),
        }
    }
}

/// Errors a flow can surface to the client.
#[derive(Debug)]
pub enum ApiError {
    /// The requested board id is not in the store.
    NotFound {
        /// Id the client asked for.
        id: BoardId,
    },
    /// The move was rejected by the board engine.
    InvalidMove {
        /// Id of the addressed board.
        id: BoardId,
        /// Board state at the time of the rejected move.
        board: Board,
        /// The engine's reason; logged, not sent on the wire.
        reason: MoveError,
    },
    /// Store or serialization failure.
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { id } => {
                debug!(board_id = %id, "Responding 404");
                let body = BoardResponse::error(NOT_FOUND_MESSAGE, Some(id), None);
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::InvalidMove { id, board, reason } => {
                warn!(board_id = %id, reason = %reason, "Rejecting move");
                let body = BoardResponse::error(INVALID_MOVE_MESSAGE, Some(id), Some(board));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Store(err) => {
                error!(error = %err, "Request failed on the store");
                let body = BoardResponse::error("Internal server error", None, None);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Builds the service router over the given store.
pub fn router(store: BoardStore) -> Router {
    Router::new()
        .route("/boards", post(create_board))
        .route("/boards/{id}", get(read_board).put(make_move))
        .with_state(store)
}

/// POST /boards - creates a fresh board.
#[instrument(skip(store))]
async fn create_board(
    State(store): State<BoardStore>,
) -> Result<(StatusCode, Json<BoardResponse>), ApiError> {
    let record = store.append(Board::new()).await?;

    info!(board_id = %record.id, "Board created");
    let body = BoardResponse::ok(record.id, record.board, None);
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /boards/{id} - reads a board and its outcome.
#[instrument(skip(store))]
async fn read_board(
    State(store): State<BoardStore>,
    Path(id): Path<BoardId>,
) -> Result<Json<BoardResponse>, ApiError> {
    let record = store
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound { id })?;

    debug!(board_id = %record.id, outcome = ?record.outcome, "Board read");
    Ok(Json(BoardResponse::ok(
        record.id,
        record.board,
        record.outcome,
    )))
}

/// PUT /boards/{id} - applies one move and persists the result.
#[instrument(skip(store, form), fields(row = form.row, col = form.col, player = form.p))]
async fn make_move(
    State(store): State<BoardStore>,
    Path(id): Path<BoardId>,
    Form(form): Form<MoveForm>,
) -> Result<Json<BoardResponse>, ApiError> {
    let record = store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound { id: id.clone() })?;

    // A finished board accepts no further moves.
    if record.outcome.is_some() {
        return Err(ApiError::InvalidMove {
            id,
            board: record.board,
            reason: MoveError::GameOver,
        });
    }

    let mv = Move::validate(&record.board, form.row, form.col, form.p).map_err(|reason| {
        ApiError::InvalidMove {
            id: id.clone(),
            board: record.board,
            reason,
        }
    })?;

    let mut board = record.board;
    board.apply(&mv);
    let outcome = game::evaluate_move(&board, &mv);

    store.rewrite(&id, board, outcome).await?;

    info!(board_id = %id, outcome = ?outcome, "Move applied");
    Ok(Json(BoardResponse::ok(id, board, outcome)))
}
