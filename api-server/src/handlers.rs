use actix_web::{
    http::StatusCode,
    web::{Data, Json},
    HttpResponse, Responder,
};
use tuner_core::{simulate, DATASETS, DEFAULT_NUM_TRIALS, MODELS};

use crate::config::AppState;
use crate::response::json_error;
use crate::types::{CatalogResponse, HealthResponse, TuneRequest, TuneResponse};

pub(crate) async fn health(state: Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        service: "tuned-ml-api",
        max_trials: state.policy.max_trials,
        default_num_trials: DEFAULT_NUM_TRIALS,
        latency_min_ms: state.latency.min_ms,
        latency_max_ms: state.latency.max_ms,
    })
}

pub(crate) async fn catalog() -> impl Responder {
    HttpResponse::Ok().json(CatalogResponse {
        datasets: DATASETS,
        models: MODELS,
        default_num_trials: DEFAULT_NUM_TRIALS,
    })
}

pub(crate) async fn tune(state: Data<AppState>, req: Json<TuneRequest>) -> impl Responder {
    let req = req.into_inner();
    // Empty strings count as absent, matching how the form submits fields.
    let dataset = req.dataset.filter(|value| !value.is_empty());
    let model_type = req.model_type.filter(|value| !value.is_empty());

    let (dataset, model_type, num_trials) = match (dataset, model_type, req.num_trials) {
        (Some(dataset), Some(model_type), Some(num_trials)) => (dataset, model_type, num_trials),
        _ => {
            return json_error(
                StatusCode::BAD_REQUEST,
                "Missing required parameters: dataset, modelType, numTrials",
            )
        }
    };

    let trials = match state.policy.check_trials(num_trials) {
        Ok(trials) => trials,
        Err(message) => return json_error(StatusCode::BAD_REQUEST, message),
    };

    let mut rng = fastrand::Rng::new();
    tokio::time::sleep(state.latency.sample(&mut rng)).await;

    tracing::info!(
        dataset = %dataset,
        model = %model_type,
        trials = trials.get(),
        "running synthetic tuning"
    );

    let run = tokio::task::spawn_blocking(move || {
        let outcome = simulate(&mut rng, trials, &dataset, &model_type);
        TuneResponse {
            trials_data: outcome.trials,
            best_params: outcome.best_params,
            best_score: outcome.best_score,
        }
    })
    .await;

    match run {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            tracing::error!("tuning worker join failure: {err}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred.",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LatencyRange, TunePolicy};
    use actix_web::{test as awtest, web, App};
    use serde_json::{json, Value};

    fn test_state() -> AppState {
        AppState {
            policy: TunePolicy {
                max_trials: tuner_core::MAX_TRIALS,
            },
            latency: LatencyRange {
                min_ms: 0,
                max_ms: 0,
            },
        }
    }

    #[actix_web::test]
    async fn tune_rejects_missing_fields() {
        let app = awtest::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/api/tune", web::post().to(tune)),
        )
        .await;

        for body in [
            json!({ "modelType": "RandomForestClassifier", "numTrials": 5 }),
            json!({ "dataset": "iris", "numTrials": 5 }),
            json!({ "dataset": "iris", "modelType": "RandomForestClassifier" }),
            json!({ "dataset": "", "modelType": "RandomForestClassifier", "numTrials": 5 }),
        ] {
            let req = awtest::TestRequest::post()
                .uri("/api/tune")
                .set_json(body)
                .to_request();
            let resp = awtest::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = awtest::read_body_json(resp).await;
            assert!(body["message"]
                .as_str()
                .unwrap_or_default()
                .contains("Missing required parameters"));
        }
    }

    #[actix_web::test]
    async fn tune_rejects_out_of_range_trial_counts() {
        let app = awtest::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/api/tune", web::post().to(tune)),
        )
        .await;

        for bad in [0, 101] {
            let req = awtest::TestRequest::post()
                .uri("/api/tune")
                .set_json(json!({
                    "dataset": "iris",
                    "modelType": "RandomForestClassifier",
                    "numTrials": bad,
                }))
                .to_request();
            let resp = awtest::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = awtest::read_body_json(resp).await;
            assert_eq!(
                body["message"],
                Value::String("Number of trials must be between 1 and 100.".to_string())
            );
        }
    }

    #[actix_web::test]
    async fn tune_returns_complete_outcome() {
        let app = awtest::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/api/tune", web::post().to(tune)),
        )
        .await;

        let req = awtest::TestRequest::post()
            .uri("/api/tune")
            .set_json(json!({
                "dataset": "iris",
                "modelType": "RandomForestClassifier",
                "numTrials": 5,
            }))
            .to_request();
        let resp = awtest::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = awtest::read_body_json(resp).await;
        let trials = body["trialsData"].as_array().unwrap();
        assert_eq!(trials.len(), 5);

        let mut max_score = f64::MIN;
        for (i, point) in trials.iter().enumerate() {
            assert_eq!(point["trial"], json!(i as u64 + 1));
            let score = point["score"].as_f64().unwrap();
            assert!((0.65..=1.10).contains(&score));
            max_score = max_score.max(score);
        }
        assert_eq!(body["bestScore"].as_f64().unwrap(), max_score);

        let criterion = body["bestParams"]["criterion"].as_str().unwrap();
        assert!(criterion == "gini" || criterion == "entropy");
        assert!(body["bestParams"]["learning_rate"].is_number());
    }

    #[actix_web::test]
    async fn regression_models_omit_criterion() {
        let app = awtest::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/api/tune", web::post().to(tune)),
        )
        .await;

        let req = awtest::TestRequest::post()
            .uri("/api/tune")
            .set_json(json!({
                "dataset": "california_housing",
                "modelType": "LinearRegression",
                "numTrials": 3,
            }))
            .to_request();
        let resp = awtest::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = awtest::read_body_json(resp).await;
        assert!(body["bestParams"].get("criterion").is_none());
    }

    #[actix_web::test]
    async fn health_reports_policy() {
        let app = awtest::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/health", web::get().to(health)),
        )
        .await;

        let req = awtest::TestRequest::get().uri("/health").to_request();
        let resp = awtest::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = awtest::read_body_json(resp).await;
        assert_eq!(body["status"], json!("healthy"));
        assert_eq!(body["service"], json!("tuned-ml-api"));
        assert_eq!(body["max_trials"], json!(100));
    }

    #[actix_web::test]
    async fn catalog_lists_form_options() {
        let app = awtest::init_service(
            App::new().route("/api/catalog", web::get().to(catalog)),
        )
        .await;

        let req = awtest::TestRequest::get().uri("/api/catalog").to_request();
        let resp = awtest::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = awtest::read_body_json(resp).await;
        assert_eq!(body["datasets"].as_array().unwrap().len(), 5);
        assert_eq!(body["models"].as_array().unwrap().len(), 8);
        assert_eq!(body["defaultNumTrials"], json!(10));
        assert_eq!(body["datasets"][0]["value"], json!("iris"));
        assert_eq!(body["datasets"][0]["task"], json!("classification"));
    }
}
