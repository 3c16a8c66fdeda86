use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

use crate::types::error::AppError;

/// Malformed or mistyped bodies get the same JSON error shape as everything else.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
