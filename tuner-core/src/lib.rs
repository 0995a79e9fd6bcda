//! Synthetic hyperparameter-tuning engine.
//!
//! This crate generates the pseudo-random trial runs served by the tuned-ml
//! API: per-trial scores that drift mildly upward, a sampled parameter set
//! per trial, and the best-scoring parameter set of the run. It is a
//! stand-in for a real optimization backend and performs no I/O.

pub mod catalog;
pub mod params;
pub mod rng;
pub mod simulate;

pub use catalog::{
    classifier_family, DatasetInfo, ModelInfo, TaskKind, DATASETS, DEFAULT_NUM_TRIALS, MODELS,
};
pub use params::{export_params_json, ParamValue, ParameterSet};
pub use rng::Entropy;
pub use simulate::{
    simulate, InvalidTrialCount, TrialCount, TrialRecord, TuningOutcome, MAX_TRIALS,
};
