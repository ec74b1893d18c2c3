use crate::analysis::ExplanationMode;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Operational state shared with the health, readiness and metrics endpoints.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_mode(raw: &str) -> Result<ExplanationMode, String> {
    raw.parse::<ExplanationMode>().map_err(|err| err.to_string())
}

/// Accepts display labels ("ELI5") as well as snake_case names.
pub(crate) fn deserialize_mode<'de, D>(deserializer: D) -> Result<ExplanationMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_mode(&raw).map_err(serde::de::Error::custom)
}
