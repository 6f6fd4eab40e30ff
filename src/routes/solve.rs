use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::SolveError,
    game::{request::solve_fields, results::render_inline, GridGenerator},
    models::LengthGroup,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SolvePayload {
    /// Grid cells separated by whitespace, row-major
    pub grid: String,
    /// Target length, as a number or a string
    #[serde(default)]
    pub depth: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Found words separated by single spaces
    pub output: String,
    pub groups: Vec<LengthGroup>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RandomGridResponse {
    pub grid: String,
    pub rows: Vec<Vec<char>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Solve a grid against the loaded dictionary
pub async fn solve(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SolvePayload>,
) -> Result<Json<SolveResponse>, ApiError> {
    let depth = match payload.depth {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    };
    let grid = payload.grid;

    // The search is CPU-bound; keep it off the async workers
    let worker_state = state.clone();
    let result = tokio::task::spawn_blocking(move || {
        let solver = &worker_state.config.solver;
        solve_fields(
            &grid,
            &depth,
            solver.grid_size,
            &worker_state.dictionary,
            solver.malformed_input,
        )
    })
    .await
    .map_err(|e| {
        tracing::error!("Solver task failed: {}", e);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "solver task failed")
    })?;

    let results = result.map_err(|e| error_response(status_for(&e), &e.to_string()))?;
    tracing::info!("Solved grid with {} words found", results.len());

    Ok(Json(SolveResponse {
        output: render_inline(&results),
        groups: results.groups(),
    }))
}

/// Generate a random grid of the configured size
pub async fn random_grid(State(state): State<Arc<AppState>>) -> Json<RandomGridResponse> {
    let grid = GridGenerator::generate(state.config.solver.grid_size);
    Json(RandomGridResponse {
        grid: grid.to_line(),
        rows: grid.rows(),
    })
}

fn status_for(error: &SolveError) -> StatusCode {
    if error.is_out_of_range() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::BAD_REQUEST
    }
}

fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
