//! Waypoint Harness: problem worlds and run orchestration for the engine.
//!
//! The harness resolves a [`RunConfig`], dispatches to the matching
//! `waypoint_search` entry point, and packages the result as a
//! [`RunReport`] with canonical JSON and a content digest.
//!
//! The harness does NOT implement search logic. It delegates to the engine.
//! Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod error;
pub mod report;
pub mod runner;
pub mod worlds;

pub use config::RunConfig;
pub use contract::ReportState;
pub use error::HarnessError;
pub use report::{RunOutcome, RunReport, DOMAIN_RUN_REPORT};
pub use runner::run;
