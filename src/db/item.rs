//! Data access for the `items` table.
//!
//! Every function runs against whatever connection it is handed (usually the
//! request's transaction) and never commits on its own. Absence is reported
//! as `None`/`false`; only store failures come back as errors.

use crate::types::error::AppError;
use crate::types::item::{ItemPatch, NewItem};
use chrono::{DateTime, Utc};
use entity::item::{ActiveModel as ItemActive, Column, Entity as Item, Model as ItemModel};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use tracing::instrument;

#[instrument(skip(db), level = "debug")]
pub async fn create<C: ConnectionTrait>(db: &C, data: NewItem) -> Result<ItemModel, AppError> {
    let am = ItemActive {
        id: NotSet,
        name: Set(data.name),
        description: Set(data.description),
        price: Set(data.price),
        is_active: Set(data.is_active),
        created_at: Set(Utc::now()),
        updated_at: Set(None),
    };
    Ok(am.insert(db).await?)
}

/// Looks an item up regardless of its active flag.
#[instrument(skip(db), level = "debug")]
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<ItemModel>, AppError> {
    Ok(Item::find_by_id(id).one(db).await?)
}

#[instrument(skip(db), level = "debug")]
pub async fn get_multi<C: ConnectionTrait>(
    db: &C,
    skip: u64,
    limit: u64,
    is_active: Option<bool>,
) -> Result<Vec<ItemModel>, AppError> {
    if limit == 0 {
        return Ok(Vec::new());
    }
    Ok(filtered(is_active)
        .order_by_asc(Column::Id)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}

/// Applies only the fields present in `patch` and always stamps `updated_at`.
#[instrument(skip(db), level = "debug")]
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: ItemPatch,
) -> Result<Option<ItemModel>, AppError> {
    let Some(current) = Item::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let stamp = next_update_stamp(current.updated_at, Utc::now());
    let mut am: ItemActive = current.into();
    if let Some(name) = patch.name {
        am.name = Set(name);
    }
    if let Some(description) = patch.description {
        am.description = Set(Some(description));
    }
    if let Some(price) = patch.price {
        am.price = Set(Some(price));
    }
    if let Some(is_active) = patch.is_active {
        am.is_active = Set(is_active);
    }
    am.updated_at = Set(Some(stamp));

    Ok(Some(am.update(db).await?))
}

/// Soft delete: the row stays readable with `is_active = false`.
#[instrument(skip(db), level = "debug")]
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<ItemModel>, AppError> {
    update(db, id, ItemPatch::deactivate()).await
}

/// Removes the row for good. `false` when there was nothing to remove.
#[instrument(skip(db), level = "debug")]
pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, AppError> {
    let res = Item::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

#[instrument(skip(db), level = "debug")]
pub async fn count<C: ConnectionTrait>(db: &C, is_active: Option<bool>) -> Result<u64, AppError> {
    Ok(filtered(is_active).count(db).await?)
}

/// Case-insensitive substring match on `name`, in id order and unpaginated.
#[instrument(skip(db), level = "debug")]
pub async fn search_by_name<C: ConnectionTrait>(
    db: &C,
    fragment: &str,
) -> Result<Vec<ItemModel>, AppError> {
    Ok(Item::find()
        .filter(name_contains(db.get_database_backend(), fragment))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

fn filtered(is_active: Option<bool>) -> Select<Item> {
    let finder = Item::find();
    match is_active {
        Some(flag) => finder.filter(Column::IsActive.eq(flag)),
        None => finder,
    }
}

// Both sides of the comparison must be folded the same way. Postgres folds
// both in ILIKE. SQLite's lower() and LIKE only fold ASCII, so the term gets
// exactly that folding and non-ASCII letters match by their own spelling.
fn name_contains(backend: DbBackend, fragment: &str) -> SimpleExpr {
    match backend {
        DbBackend::Postgres => {
            Expr::col(Column::Name).ilike(LikeExpr::new(contains_pattern(fragment)).escape('\\'))
        }
        _ => {
            let pattern = contains_pattern(&fragment.to_ascii_lowercase());
            Expr::expr(Func::lower(Expr::col(Column::Name)))
                .like(LikeExpr::new(pattern).escape('\\'))
        }
    }
}

// `%fragment%` with LIKE wildcards in the fragment taken literally.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

// updated_at must not go backwards even if the clock does.
fn next_update_stamp(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    previous.map_or(now, |prev| prev.max(now))
}
