//! Domain library for the spirit animal quiz service.
//!
//! The [`quiz`] module holds the full answer pipeline: field validation,
//! scoring, classification into a spirit animal, and the HTTP router the API
//! crate mounts. [`config`], [`telemetry`], and [`error`] carry the service
//! plumbing shared with the binary.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
