//! Parameter value storage types.

use std::collections::BTreeMap;

use serde::Serialize;

/// A sampled hyperparameter value.
///
/// Serializes untagged, so a parameter map comes out as plain JSON numbers
/// and strings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A floating-point parameter value.
    Float(f64),
    /// An integer parameter value.
    Int(i64),
    /// A categorical parameter value.
    Text(String),
}

/// The hyperparameter configuration attached to a trial.
pub type ParameterSet = BTreeMap<String, ParamValue>;

/// Render a parameter set as a standalone pretty-printed JSON document,
/// the payload offered for download next to the results table.
pub fn export_params_json(params: &ParameterSet) -> String {
    serde_json::to_string_pretty(params).unwrap_or_else(|_| "{}".to_string())
}
