//! Misbehavior detection module.
//!
//! This module is responsible for spotting clients that renew their
//! lease before the configured lease time has elapsed (SRP).

mod misbehavior_detector;

pub use misbehavior_detector::{MisbehaviorDetector, MisbehaviorReport, Observation};
