use serde::{Deserialize, Serialize};
use crate::types::{error::AppError, item::{ItemRes, NAME_MAX_CHARS}};

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;

/// Query string of `GET /items`.
#[derive(Deserialize, Debug, Default)]
pub struct RItemQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub is_active: Option<bool>,
    pub q: Option<String>,
}

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub per_page: u64,
}

impl PageWindow {
    pub fn new(page: u64, per_page: u64) -> Result<Self, AppError> {
        if page < 1 {
            return Err(AppError::validation("page must be at least 1"));
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(AppError::validation(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}"
            )));
        }
        Ok(PageWindow { page, per_page })
    }

    /// Rows to skip before this page starts. Saturates instead of overflowing
    /// for absurd page numbers, which simply yield an empty page.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page).min(i64::MAX as u64)
    }

    /// Cut this page out of an already loaded result set.
    pub fn slice<T>(&self, rows: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.per_page).unwrap_or(usize::MAX);
        rows.into_iter().skip(skip).take(take).collect()
    }
}

impl RItemQuery {
    pub fn window(&self) -> Result<PageWindow, AppError> {
        PageWindow::new(self.page.unwrap_or(1), self.per_page.unwrap_or(DEFAULT_PER_PAGE))
    }

    /// The trimmed search fragment, if one was sent.
    pub fn search_term(&self) -> Result<Option<String>, AppError> {
        let Some(raw) = self.q.as_deref() else {
            return Ok(None);
        };
        let term = raw.trim();
        if term.is_empty() {
            return Err(AppError::validation("q must not be empty"));
        }
        if term.chars().count() > NAME_MAX_CHARS {
            return Err(AppError::validation(format!(
                "q must be at most {NAME_MAX_CHARS} characters"
            )));
        }
        Ok(Some(term.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ItemListRes {
    pub items: Vec<ItemRes>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}
