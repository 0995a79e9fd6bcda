use serde::{Deserialize, Serialize};
use tuner_core::{DatasetInfo, ModelInfo, ParameterSet, TrialRecord};

/// Body of `POST /api/tune`.
///
/// Fields are optional so a missing one gets the API's own message instead
/// of a serde deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TuneRequest {
    #[serde(default)]
    pub(crate) dataset: Option<String>,
    #[serde(default)]
    pub(crate) model_type: Option<String>,
    #[serde(default)]
    pub(crate) num_trials: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TuneResponse {
    pub(crate) trials_data: Vec<TrialRecord>,
    pub(crate) best_params: ParameterSet,
    pub(crate) best_score: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) service: &'static str,
    pub(crate) max_trials: u32,
    pub(crate) default_num_trials: u32,
    pub(crate) latency_min_ms: u64,
    pub(crate) latency_max_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogResponse {
    pub(crate) datasets: &'static [DatasetInfo],
    pub(crate) models: &'static [ModelInfo],
    pub(crate) default_num_trials: u32,
}
