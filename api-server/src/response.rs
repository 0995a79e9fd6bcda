use actix_web::{http::StatusCode, HttpResponse};

pub(crate) fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "message": message.into(),
    }))
}
