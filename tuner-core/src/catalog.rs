//! The fixed dataset and model menus offered by the configuration form.

use serde::Serialize;

/// Whether a dataset or model targets classification or regression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Classification,
    Regression,
}

/// A selectable dataset.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct DatasetInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub task: TaskKind,
}

/// A selectable model type.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ModelInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub task: TaskKind,
}

/// Trial count the form starts out with.
pub const DEFAULT_NUM_TRIALS: u32 = 10;

pub const DATASETS: &[DatasetInfo] = &[
    DatasetInfo {
        value: "iris",
        label: "Iris Dataset (Classification)",
        task: TaskKind::Classification,
    },
    DatasetInfo {
        value: "diabetes",
        label: "Diabetes Dataset (Regression)",
        task: TaskKind::Regression,
    },
    DatasetInfo {
        value: "wine",
        label: "Wine Dataset (Classification)",
        task: TaskKind::Classification,
    },
    DatasetInfo {
        value: "breast_cancer",
        label: "Breast Cancer Dataset (Classification)",
        task: TaskKind::Classification,
    },
    DatasetInfo {
        value: "california_housing",
        label: "California Housing Dataset (Regression)",
        task: TaskKind::Regression,
    },
];

pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        value: "RandomForestClassifier",
        label: "Random Forest Classifier",
        task: TaskKind::Classification,
    },
    ModelInfo {
        value: "LogisticRegression",
        label: "Logistic Regression",
        task: TaskKind::Classification,
    },
    ModelInfo {
        value: "SVC",
        label: "Support Vector Classifier",
        task: TaskKind::Classification,
    },
    ModelInfo {
        value: "KNeighborsClassifier",
        label: "K-Nearest Neighbors Classifier",
        task: TaskKind::Classification,
    },
    ModelInfo {
        value: "RandomForestRegressor",
        label: "Random Forest Regressor",
        task: TaskKind::Regression,
    },
    ModelInfo {
        value: "LinearRegression",
        label: "Linear Regression",
        task: TaskKind::Regression,
    },
    ModelInfo {
        value: "SVR",
        label: "Support Vector Regressor",
        task: TaskKind::Regression,
    },
    ModelInfo {
        value: "KNeighborsRegressor",
        label: "K-Nearest Neighbors Regressor",
        task: TaskKind::Regression,
    },
];

/// Models that carry the extra `criterion` hyperparameter.
///
/// Matches on the label itself, so `LogisticRegression` and `SVC` stay
/// without it even though they solve classification tasks.
pub fn classifier_family(model: &str) -> bool {
    model.contains("Classifier")
}
