use crate::db::{database_service::DatabaseService, item};
use crate::types::item::{ItemRes, RItemCreate};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::debug;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RItemCreate>,
) -> ApiResult<ItemRes> {
    let new_item = body.into_inner().validate()?;

    let txn = db.begin().await?;
    let created = item::create(&txn, new_item).await?;
    txn.commit().await?;

    debug!(id = created.id, "item created");
    Ok(ApiResponse::Created(created.into()))
}
