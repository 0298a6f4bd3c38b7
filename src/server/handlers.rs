use super::AppState;
use crate::core::{decode_xml, plays_per_game, thing_stats, DateWindow};
use crate::domain::model::{PlaysResponse, ThingStats};
use crate::utils::error::{GatewayError, Result};
use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaysParams {
    pub username: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsParams {
    pub game_id: Option<String>,
}

/// `GET /api/bgg-plays` — per-game play counts for a user inside an
/// inclusive date window. A user with no plays in range gets an empty array.
pub async fn plays(
    State(state): State<AppState>,
    Query(params): Query<PlaysParams>,
) -> Result<Json<PlaysResponse>> {
    let username = required(params.username, "Username is required.")?;
    let start = required(params.start_date, "Start date and end date are required.")?;
    let end = required(params.end_date, "Start date and end date are required.")?;
    validate_date(&start)?;
    validate_date(&end)?;

    tracing::info!(
        "Fetching plays for user: {} from {} to {}",
        username,
        start,
        end
    );
    let xml = state
        .catalog
        .plays_xml(&username)
        .await
        .map_err(|e| log_failure("bgg-plays", &username, e))?;
    let doc =
        decode_xml(&xml, &state.decode_opts).map_err(|e| log_failure("bgg-plays", &username, e))?;

    let records = doc
        .get("plays")
        .map(|plays| state.normalizer.play_records(plays))
        .unwrap_or_default();
    let window = DateWindow::new(start, end);
    let game_ids = plays_per_game(&records, &window);

    tracing::info!("Found {} unique game IDs with play counts", game_ids.len());
    Ok(Json(PlaysResponse { game_ids }))
}

/// `GET /api/bgg-stats` — name, owned count and average rating for one game.
pub async fn stats(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Result<Json<ThingStats>> {
    let game_id = required(params.game_id, "Game ID is required.")?;

    tracing::info!("Fetching stats for game ID: {}", game_id);
    let xml = state
        .catalog
        .thing_xml(&game_id)
        .await
        .map_err(|e| log_failure("bgg-stats", &game_id, e))?;
    let doc =
        decode_xml(&xml, &state.decode_opts).map_err(|e| log_failure("bgg-stats", &game_id, e))?;

    let stats = doc
        .get("items")
        .and_then(|items| thing_stats(&state.normalizer, items))
        .ok_or_else(|| GatewayError::not_found("Game not found."))?;

    Ok(Json(stats))
}

fn log_failure(endpoint: &str, key: &str, err: GatewayError) -> GatewayError {
    tracing::error!("Error handling {} for {}: {}", endpoint, key, err);
    err
}

fn required(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GatewayError::validation(message)),
    }
}

// The aggregator compares dates lexically, which is only sound for
// zero-padded ISO input, so the boundary enforces the format. chrono accepts
// unpadded numbers, hence the extra length check.
fn validate_date(value: &str) -> Result<()> {
    let well_formed = value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
    if well_formed {
        Ok(())
    } else {
        Err(GatewayError::validation(
            "Dates must be in YYYY-MM-DD format.",
        ))
    }
}
