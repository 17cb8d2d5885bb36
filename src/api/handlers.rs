use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Local;
use nanoid::nanoid;
use std::time::Instant;
use tracing::Instrument;

use crate::data_models::CitationType;
use crate::error::SearchError;
use crate::gateway::GatewayClient;
use crate::normalizer::build_search_response;
use crate::prompt;

use super::AppState;
use super::models::{SearchRequest, SearchResponse};

pub async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, SearchError> {
    let request_id = nanoid!(10);
    let span = tracing::info_span!("search", %request_id);
    run_search(state, payload).instrument(span).await.map(Json)
}

async fn run_search(
    state: AppState,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<SearchResponse, SearchError> {
    let start = Instant::now();

    let Some(api_key) = state.config.api_key() else {
        tracing::error!("provider API key is not configured");
        return Err(SearchError::Configuration);
    };

    let Json(request) = payload.map_err(|e| {
        tracing::warn!(error = %e, "rejected search body");
        SearchError::InvalidInput(e.body_text())
    })?;

    let topic = request.topic.as_deref().map(str::trim).unwrap_or_default();
    let stance = request.stance.as_deref().map(str::trim).unwrap_or_default();
    if topic.is_empty() || stance.is_empty() {
        tracing::warn!(
            topic_present = !topic.is_empty(),
            stance_present = !stance.is_empty(),
            "missing topic or stance"
        );
        return Err(SearchError::InvalidInput(
            "topic and stance are required".to_string(),
        ));
    }

    let selected = parse_selected_types(request.selected_types.as_deref().unwrap_or_default());
    let prompt = prompt::compose(topic, stance, &selected)?;

    let client = GatewayClient::new(
        state.http.clone(),
        &state.config.api_url,
        api_key,
        &state.config.model,
    );
    let content = client.complete(&prompt).await?;

    let today = Local::now().date_naive();
    let response = build_search_response(&content, topic, stance, today, &state.padding_policy());

    tracing::info!(
        citations = response.citations.len(),
        placeholders = response.citations.iter().filter(|c| c.placeholder).count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "search completed"
    );
    Ok(response)
}

/// Unknown names are dropped; an empty result means "all types".
pub fn parse_selected_types(names: &[String]) -> Vec<CitationType> {
    names
        .iter()
        .filter_map(|name| match name.parse::<CitationType>() {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!("ignoring selected type: {e}");
                None
            }
        })
        .collect()
}
