//! Domain modules: one slice per API resource.
//!
//! Each slice holds its domain types (`mod.rs`), wire types (`wire.rs`),
//! wire → domain conversion (`convert.rs`), app-owned state containers
//! (`state.rs`) and, with the `http` feature, a sub-client (`client.rs`).

pub mod coin;
pub mod ohlc;
