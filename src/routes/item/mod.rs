use crate::types::error::AppError;
use std::num::IntErrorKind;

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod update;

/// Ids arrive as raw path segments. A well-formed integer too large for the
/// id column can't name a stored item, so it is a 404 rather than a 400.
pub(crate) fn parse_item_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => AppError::NotFound,
        _ => AppError::BadRequest(format!("invalid item id: {raw}")),
    })
}
