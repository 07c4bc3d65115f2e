//! Reporting module for analysis results.
//!
//! This module defines the `ReportSink` trait (ISP, DIP) and provides
//! a console implementation.

mod console_reporter;

pub use console_reporter::{format_duration, ConsoleReporter};

use crate::AnalysisReport;

/// Trait for rendering a finished analysis (Interface Segregation Principle).
///
/// This trait is intentionally minimal - it only handles rendering an
/// already-computed report, not analysis or filtering. Different
/// implementations can output to console, files, webhooks, etc.
pub trait ReportSink: Send {
    /// Render the full analysis report.
    fn render(&self, report: &AnalysisReport);
}
