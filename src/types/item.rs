use serde::{Serialize, Deserialize};
use crate::types::{error::AppError, patch::Patch};

pub const NAME_MAX_CHARS: usize = 255;

/// Body of `POST /items`.
#[derive(Deserialize, Debug)]
pub struct RItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Body of `PUT` and `PATCH /items/{id}`. Both routes patch.
#[derive(Deserialize, Debug, Default)]
pub struct RItemUpdate {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub price: Patch<f64>,
    #[serde(default)]
    pub is_active: Patch<bool>,
}

/// Validated insert for the data access layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub is_active: bool,
}

/// Validated change set. `None` leaves the stored column as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl ItemPatch {
    pub fn deactivate() -> Self {
        ItemPatch { is_active: Some(false), ..Default::default() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemRes {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<entity::item::Model> for ItemRes {
    fn from(m: entity::item::Model) -> Self {
        ItemRes {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            is_active: m.is_active,
            created_at: m.created_at.to_rfc3339(),
            updated_at: m.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

impl RItemCreate {
    pub fn validate(self) -> Result<NewItem, AppError> {
        Ok(NewItem {
            name: validate_name(&self.name)?,
            description: self.description.map(|d| d.trim().to_string()),
            price: self.price.map(validate_price).transpose()?,
            is_active: self.is_active,
        })
    }
}

impl RItemUpdate {
    /// Only fields carrying a value end up in the patch; `null` and missing
    /// keys both leave the column untouched.
    pub fn validate(self) -> Result<ItemPatch, AppError> {
        Ok(ItemPatch {
            name: self.name.into_value().map(|n| validate_name(&n)).transpose()?,
            description: self.description.map(|d| d.trim().to_string()).into_value(),
            price: self.price.into_value().map(validate_price).transpose()?,
            is_active: self.is_active.into_value(),
        })
    }
}

pub fn validate_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::validation("name must not be empty"));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(AppError::validation(format!(
            "name must be at most {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

pub fn validate_price(price: f64) -> Result<f64, AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation("price must be a non-negative number"));
    }
    Ok(price)
}
