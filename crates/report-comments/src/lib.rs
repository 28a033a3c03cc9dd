//! Assembles personalized student-report comments from banded phrase tables.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
