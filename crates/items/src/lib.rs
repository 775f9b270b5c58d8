//! Item records.
//!
//! This crate contains the external entity the derivation engine reads: the
//! item record as the front end persists it. The engine never mutates items;
//! it only classifies them and emits derived values alongside references to
//! the originals.

pub mod item;

pub use item::Item;
