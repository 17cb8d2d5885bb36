use serde::Deserialize;

pub use crate::data_models::SearchResponse;

/// Body of `POST /api/search`. Fields are optional so that a missing topic
/// or stance is reported as a 400 with our own message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub stance: Option<String>,
    #[serde(default)]
    pub selected_types: Option<Vec<String>>,
}
