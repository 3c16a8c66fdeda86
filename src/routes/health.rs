use actix_web::get;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub timestamp: String,
    pub message: String,
}

#[get("")]
async fn health(
    _req: actix_web::HttpRequest
) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response {
        timestamp: Utc::now().to_rfc3339(),
        message: "api reporting for duty!".to_string(),
    }))
}
