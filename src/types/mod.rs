pub mod error;
pub mod item;
pub mod pagination;
pub mod patch;
pub mod response;
