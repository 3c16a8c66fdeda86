use crate::db::{database_service::DatabaseService, item};
use crate::types::pagination::{ItemListRes, RItemQuery};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

/// Plain listing pages in the database. A search loads every match, filters
/// on `is_active` and cuts the page in memory, so its cost grows with the
/// number of matches rather than with `per_page`.
#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<RItemQuery>,
) -> ApiResult<ItemListRes> {
    let window = query.window()?;
    let search = query.search_term()?;

    let txn = db.begin().await?;
    let (rows, total) = match search {
        Some(term) => {
            let mut matches = item::search_by_name(&txn, &term).await?;
            if let Some(flag) = query.is_active {
                matches.retain(|m| m.is_active == flag);
            }
            let total = matches.len() as u64;
            (window.slice(matches), total)
        }
        None => {
            let rows = item::get_multi(&txn, window.skip(), window.per_page, query.is_active).await?;
            let total = item::count(&txn, query.is_active).await?;
            (rows, total)
        }
    };
    txn.commit().await?;

    Ok(ApiResponse::Ok(ItemListRes {
        items: rows.into_iter().map(Into::into).collect(),
        total,
        page: window.page,
        per_page: window.per_page,
    }))
}
