use crate::db::{database_service::DatabaseService, item};
use super::parse_item_id;
use crate::types::{error::AppError, item::ItemRes};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct DeleteQuery {
    #[serde(default)]
    pub permanent: bool,
}

/// Soft delete by default; `?permanent=true` removes the row and answers 410.
#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    query: web::Query<DeleteQuery>,
) -> ApiResult<ItemRes> {
    let id = parse_item_id(&path)?;
    let txn = db.begin().await?;

    if query.permanent {
        if !item::hard_delete(&txn, id).await? {
            return Err(AppError::NotFound);
        }
        txn.commit().await?;
        info!(id, "item permanently deleted");
        return Ok(ApiResponse::Gone("Item permanently deleted".to_string()));
    }

    let deactivated = item::delete(&txn, id).await?.ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(ApiResponse::Ok(deactivated.into()))
}
