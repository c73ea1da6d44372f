//! Shared type definitions for the Turn Co-Pilot assistant.
//!
//! This crate is the single source of truth for the types used across the
//! Co-Pilot workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the dashboard.
//!
//! # Modules
//!
//! - [`urgency`] -- The four-level urgency scale derived from occurrence counts
//! - [`scenario`] -- Driving scenario definitions and the built-in catalog
//! - [`alert`] -- Alert entries recorded per trigger event

pub mod alert;
pub mod scenario;
pub mod urgency;

// Re-export all public types at crate root for convenience.
pub use alert::AlertEntry;
pub use scenario::{Scenario, ScenarioCatalog};
pub use urgency::UrgencyLevel;
