//! `homekeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the item category enum, the static category policy table, and
//! the shared error/priority types.

pub mod category;
pub mod error;
pub mod id;
pub mod policy;
pub mod priority;

pub use category::Category;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use policy::{
    StockThresholds, is_stock_managed, reminder_lead_days, requires_expiry_tracking,
    stock_thresholds,
};
pub use priority::Priority;
