//! # AGP Analytics Engine
//!
//! Turns a normalized `ReadingSet` into the statistics of an ambulatory
//! glucose profile.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no knowledge of files, terminals or charts. Depends only
//!   on `core-types`.
//! - **Stateless calculation:** `AgpEngine` holds no state between calls; the
//!   same reading set always yields the same output.
//! - **Undefined is an error:** an empty set, a single reading or a zero mean
//!   surface as `AnalyticsError` instead of NaN.
//!
//! ## Public API
//!
//! - `AgpEngine`: summary, circadian profile and full report calculations.
//! - `Summary`, `TimeInRange`, `CircadianProfile`, `ProfilePoint`, `AgpReport`.
//! - `ClockDuration`: percentage of a day as hours and minutes.

// Declare the modules that constitute this crate.
pub mod duration;
pub mod engine;
pub mod error;
pub mod profile;
pub mod report;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use duration::ClockDuration;
pub use engine::AgpEngine;
pub use error::AnalyticsError;
pub use profile::{CircadianProfile, ProfilePoint};
pub use report::{AgpReport, RangeSegment, Summary, TimeInRange};
