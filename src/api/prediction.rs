//! Prediction API: the scored shortlist ranking and winner history

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::scoring::{
    self, Candidate, PastWinner, AWARDS_BONUS, TROPHY_BONUS,
};
use crate::AppState;

/// Scoring weights echoed in the prediction response
#[derive(Debug, Serialize)]
pub struct Weights {
    pub trophy_bonus: f64,
    pub awards_bonus: f64,
}

/// Prediction response: the ranked scoreboard, best candidate first
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predicted_winner: String,
    pub weights: Weights,
    pub total_candidates: usize,
    pub candidates: Vec<Candidate>,
}

/// GET /api/prediction
///
/// Cleans the shortlist, scores every eligible candidate, and returns the
/// ranking. Rows dropped during cleaning are silently excluded; an empty
/// ranking is an error.
pub async fn get_prediction(
    State(state): State<AppState>,
) -> Result<Json<PredictionResponse>, PredictionError> {
    let ranking = scoring::rank_shortlist(&state.dataset.shortlist)
        .map_err(|e| PredictionError::Failed(e.to_string()))?;

    Ok(Json(PredictionResponse {
        predicted_winner: ranking.winner().player.clone(),
        weights: Weights {
            trophy_bonus: TROPHY_BONUS,
            awards_bonus: AWARDS_BONUS,
        },
        total_candidates: ranking.candidates.len(),
        candidates: ranking.candidates,
    }))
}

/// Winner history response
#[derive(Debug, Serialize)]
pub struct WinnerHistoryResponse {
    pub total_winners: usize,
    pub winners: Vec<PastWinner>,
}

/// GET /api/winners
///
/// Past winners with derived trophy and award counts. The 2020 placeholder
/// row (award not presented) is excluded.
pub async fn get_winner_history(State(state): State<AppState>) -> Json<WinnerHistoryResponse> {
    let winners = scoring::winner_history(&state.dataset.winners);
    Json(WinnerHistoryResponse {
        total_winners: winners.len(),
        winners,
    })
}

/// Prediction API errors
#[derive(Debug)]
pub enum PredictionError {
    Failed(String),
}

impl IntoResponse for PredictionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PredictionError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
