//! Core types shared across Axon facilities
//!
//! This crate provides foundational types used by the dispatch kernel,
//! error handling, and logging facilities:
//!
//! - **Identity types**: ContextId (observer ownership), DispatchId
//!   (per-broadcast log correlation)
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::{ContextId, DispatchId};
