use crate::db::{database_service::DatabaseService, item};
use super::parse_item_id;
use crate::types::{error::AppError, item::ItemRes};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{id}")]
async fn read(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<ItemRes> {
    let id = parse_item_id(&path)?;
    let txn = db.begin().await?;
    let found = item::get(&txn, id).await?;
    txn.commit().await?;

    let found = found.ok_or(AppError::NotFound)?;
    Ok(ApiResponse::Ok(found.into()))
}
