//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, render-ready)
//! - `wire.rs`: Raw serde structs matching upstream responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `state.rs`: State containers with guarded update methods
//! - `client.rs`: Sub-client running one flow against a `MarketSource`

pub mod asset;
pub mod detail;
pub mod price_history;
