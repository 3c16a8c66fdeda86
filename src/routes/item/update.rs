use crate::db::{database_service::DatabaseService, item};
use super::parse_item_id;
use crate::types::{error::AppError, item::{ItemRes, RItemUpdate}};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{patch, put, web};
use std::sync::Arc;

// PUT is not a replace: absent fields keep their stored value, same as PATCH.
#[put("/{id}")]
async fn replace(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    body: web::Json<RItemUpdate>,
) -> ApiResult<ItemRes> {
    apply(&db, parse_item_id(&path)?, body.into_inner()).await
}

#[patch("/{id}")]
async fn patch(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    body: web::Json<RItemUpdate>,
) -> ApiResult<ItemRes> {
    apply(&db, parse_item_id(&path)?, body.into_inner()).await
}

async fn apply(db: &DatabaseService, id: i32, body: RItemUpdate) -> ApiResult<ItemRes> {
    let changes = body.validate()?;

    let txn = db.begin().await?;
    let updated = item::update(&txn, id, changes).await?.ok_or(AppError::NotFound)?;
    txn.commit().await?;

    Ok(ApiResponse::Ok(updated.into()))
}
