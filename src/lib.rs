// src/lib.rs
// TaskTracker - demo task-tracking API with per-user analytics

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod state;
pub mod store;

pub use error::{EntityKind, Result, TrackerError};
